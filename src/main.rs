use std::error::Error;
use std::io::Write;
use std::path::Path;

use dotenvy::dotenv;
use tokio::io::AsyncBufReadExt;
use tracing::info;

mod catalog;
mod codec;
mod config;
mod llm;
mod utils;
mod workflow;

use catalog::{find_category, find_option, CATEGORIES};
use config::CONFIG;
use llm::{GeminiGenerator, ImageGenerator};
use utils::logging::init_logging;
use utils::timing::{complete_session_timer, start_session_timer};
use workflow::{RequestState, Snapshot, StudioState};

type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

#[derive(Debug, Clone)]
enum Command {
    Help,
    Upload(String),
    Style(Option<String>),
    Generate,
    Options(Option<String>),
    View(String),
    Prompt(String),
    Save(Option<String>),
    Status,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };
    let optional_arg = || {
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    };

    match name {
        "help" | "?" => Ok(Command::Help),
        "upload" => {
            if rest.is_empty() {
                Err("Usage: upload <path>".to_string())
            } else {
                Ok(Command::Upload(rest.to_string()))
            }
        }
        "style" => Ok(Command::Style(optional_arg())),
        "generate" => Ok(Command::Generate),
        "options" => Ok(Command::Options(optional_arg())),
        "view" => {
            if rest.is_empty() {
                Err("Usage: view <option-id> (see 'options')".to_string())
            } else {
                Ok(Command::View(rest.to_string()))
            }
        }
        "prompt" => {
            if rest.is_empty() {
                Err("Usage: prompt <instruction text>".to_string())
            } else {
                Ok(Command::Prompt(rest.to_string()))
            }
        }
        "save" => Ok(Command::Save(optional_arg())),
        "status" => Ok(Command::Status),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!(
            "Unknown command '{other}'. Type 'help' for the command list."
        )),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  upload <path>      Load a massing image (PNG, JPG, WEBP, up to 5MB)");
    println!("  style [text]       Show or set the architectural style description");
    println!("  generate           Render a building from the uploaded shape");
    println!("  options [category] List quick-pick view and transformation options");
    println!("  view <id>          Re-render the result with a quick-pick option");
    println!("  prompt <text>      Re-render the result with a free-text instruction");
    println!("  save [dir]         Save the current render to disk");
    println!("  status             Show the session state");
    println!("  quit               Leave the studio");
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    let mut iter = text.chars();
    let truncated: String = iter.by_ref().take(max_chars).collect();
    if iter.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}

fn describe_data_url(data_url: &str) -> String {
    match codec::parse_data_url(data_url) {
        Ok(image) => format!("{}, {} chars base64", image.mime_type, image.base64.len()),
        Err(_) => "unknown format".to_string(),
    }
}

fn print_status(snapshot: &Snapshot) {
    match &snapshot.uploaded {
        Some(uploaded) => println!(
            "Shape image: {} ({} chars base64)",
            uploaded.image.mime_type,
            uploaded.image.base64.len()
        ),
        None => println!("Shape image: none"),
    }
    println!("Style: {}", truncate_chars(&snapshot.style_prompt, 80));
    match &snapshot.generated {
        Some(data_url) => println!("Render: {}", describe_data_url(data_url)),
        None => println!("Render: none"),
    }
    match &snapshot.request {
        RequestState::Idle => println!("Last request: idle"),
        RequestState::Pending => println!("Last request: in flight"),
        RequestState::Succeeded => println!("Last request: succeeded"),
        RequestState::Failed(message) => println!("Last request: failed - {message}"),
    }
}

fn print_options(category_arg: Option<&str>) {
    match category_arg {
        None => {
            println!("Categories (use 'options <key>' to list entries):");
            for category in CATEGORIES {
                println!(
                    "  {:<14} {} ({} options)",
                    category.key,
                    category.title,
                    category.options.len()
                );
            }
        }
        Some(key) => match find_category(key) {
            Some(category) => {
                println!("{}:", category.title);
                for option in category.options {
                    println!("  {:<32} {}", option.id, option.label);
                }
            }
            None => println!("Unknown category '{key}'. Run 'options' to list them."),
        },
    }
}

async fn upload_handler(studio: &StudioState, path_arg: &str) {
    let path = Path::new(path_arg);
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            println!("Could not read {}: {err}", path.display());
            return;
        }
    };

    let declared = codec::mime_type_for_extension(path);
    match studio.upload(bytes, declared) {
        Ok(()) => {
            let snapshot = studio.snapshot();
            if let Some(uploaded) = snapshot.uploaded {
                info!("Uploaded shape image from {}", path.display());
                println!(
                    "Uploaded {} ({}). Set a style and run 'generate'.",
                    path.display(),
                    uploaded.image.mime_type
                );
            }
        }
        Err(err) => println!("Upload failed: {err}"),
    }
}

async fn generate_handler<G: ImageGenerator>(studio: &StudioState, generator: &G) {
    let mut timer = start_session_timer("generate", Some(studio.style_prompt()));
    println!("Generating the initial design...");
    match studio.generate_initial(generator).await {
        Ok(data_url) => {
            complete_session_timer(&mut timer, "success", None);
            println!("Render ready ({}).", describe_data_url(&data_url));
            println!("Explore it with 'options', 'view <id>', or 'prompt <text>'.");
        }
        Err(err) => {
            complete_session_timer(&mut timer, "error", Some(err.to_string()));
            println!("Error: {err}");
        }
    }
}

async fn follow_up_handler<G: ImageGenerator>(
    studio: &StudioState,
    generator: &G,
    command: &str,
    instruction: &str,
) {
    let mut timer = start_session_timer(command, Some(instruction.to_string()));
    println!("Generating a new view...");
    match studio.generate_follow_up(generator, instruction).await {
        Ok(data_url) => {
            complete_session_timer(&mut timer, "success", None);
            println!("Render updated ({}).", describe_data_url(&data_url));
        }
        Err(err) => {
            complete_session_timer(&mut timer, "error", Some(err.to_string()));
            println!("Error: {err}");
        }
    }
}

fn save_handler(studio: &StudioState, dir_arg: Option<&str>) {
    let mut timer = start_session_timer("save", dir_arg.map(str::to_string));
    let dir = dir_arg.unwrap_or(CONFIG.download_dir.as_str());
    match studio.save_current(Path::new(dir), &CONFIG.download_prefix) {
        Ok(path) => {
            complete_session_timer(&mut timer, "success", Some(path.display().to_string()));
            println!("Saved render to {}.", path.display());
        }
        Err(err) => {
            complete_session_timer(&mut timer, "error", Some(err.to_string()));
            println!("Error: {err}");
        }
    }
}

async fn handle_command<G: ImageGenerator>(
    studio: &StudioState,
    generator: &G,
    command: Command,
) {
    match command {
        Command::Help => print_help(),
        Command::Upload(path) => upload_handler(studio, &path).await,
        Command::Style(None) => println!("Style: {}", studio.style_prompt()),
        Command::Style(Some(text)) => {
            studio.set_style_prompt(&text);
            println!("Style updated.");
        }
        Command::Generate => generate_handler(studio, generator).await,
        Command::Options(category) => print_options(category.as_deref()),
        Command::View(id) => match find_option(&id) {
            Some(option) => {
                follow_up_handler(studio, generator, "view", option.instruction).await
            }
            None => println!("Unknown option '{id}'. Run 'options' to browse ids."),
        },
        Command::Prompt(text) => follow_up_handler(studio, generator, "prompt", &text).await,
        Command::Save(dir) => save_handler(studio, dir.as_deref()),
        Command::Status => print_status(&studio.snapshot()),
        Command::Quit => unreachable!("handled by the session loop"),
    }
}

#[tokio::main]
async fn main() -> HandlerResult {
    dotenv().ok();
    let _guards = init_logging();

    if CONFIG.gemini_api_key.trim().is_empty() {
        return Err("GEMINI_API_KEY is required".into());
    }

    info!(
        "Starting AI Architect Vision studio (model: {})",
        CONFIG.gemini_image_model
    );

    println!("AI Architect Vision");
    println!("Biến ý tưởng hình khối thành kiệt tác kiến trúc");
    println!("Type 'help' to list commands.");

    let studio = StudioState::new();
    let generator = GeminiGenerator::from_config();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => handle_command(&studio, &generator, command).await,
            Err(message) => println!("{message}"),
        }
    }

    println!("Goodbye.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_with_and_without_arguments() {
        assert!(matches!(parse_command("generate"), Ok(Command::Generate)));
        assert!(matches!(
            parse_command("upload shapes/block.png"),
            Ok(Command::Upload(ref path)) if path == "shapes/block.png"
        ));
        assert!(matches!(parse_command("style"), Ok(Command::Style(None))));
        assert!(matches!(
            parse_command("style brutalist concrete tower"),
            Ok(Command::Style(Some(ref text))) if text == "brutalist concrete tower"
        ));
        assert!(matches!(
            parse_command("view drone"),
            Ok(Command::View(ref id)) if id == "drone"
        ));
    }

    #[test]
    fn missing_arguments_are_usage_errors() {
        assert!(parse_command("upload").is_err());
        assert!(parse_command("view").is_err());
        assert!(parse_command("prompt").is_err());
        assert!(parse_command("teleport").is_err());
    }

    #[test]
    fn long_style_text_is_truncated_for_display() {
        let text = "x".repeat(100);
        let shown = truncate_chars(&text, 80);
        assert_eq!(shown.chars().count(), 83);
        assert!(shown.ends_with("..."));
        assert_eq!(truncate_chars("short", 80), "short");
    }
}
