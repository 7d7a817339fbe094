use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use tracing::info;

use crate::catalog::ViewOption;
use crate::codec::{self, CodecError, EncodedImage, SUPPORTED_UPLOAD_MIME_TYPES};
use crate::config::{DEFAULT_STYLE_PROMPT, INITIAL_RENDER_PROMPT};
use crate::llm::{GenerationError, ImageGenerator};

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Please upload an image of a building block first.")]
    NoUploadedImage,
    #[error("A base image must be generated first.")]
    NoGeneratedImage,
    #[error("A generation request is already running. Wait for it to finish.")]
    RequestInFlight,
    #[error("Unsupported image type '{0}'. Use a PNG, JPEG, or WEBP file.")]
    UnsupportedImageType(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("Failed to save render: {0}")]
    Save(String),
}

/// Outcome of the most recent generation call. Pending gates every trigger,
/// so at most one call is outstanding at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// The user's source image: marshalled bytes plus a derived preview data URL,
/// kept as an explicit pair rather than a mutated file handle.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub image: EncodedImage,
    pub preview: String,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub uploaded: Option<UploadedImage>,
    pub style_prompt: String,
    pub generated: Option<String>,
    pub request: RequestState,
}

#[derive(Debug)]
struct StudioInner {
    uploaded: Option<UploadedImage>,
    style_prompt: String,
    generated: Option<String>,
    request: RequestState,
}

/// The whole session model: one uploaded image, one style text, at most one
/// generated render. Every transition goes through these methods; the lock is
/// never held across an await.
#[derive(Clone)]
pub struct StudioState {
    inner: Arc<Mutex<StudioInner>>,
}

impl StudioState {
    pub fn new() -> Self {
        StudioState {
            inner: Arc::new(Mutex::new(StudioInner {
                uploaded: None,
                style_prompt: DEFAULT_STYLE_PROMPT.to_string(),
                generated: None,
                request: RequestState::Idle,
            })),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock();
        Snapshot {
            uploaded: inner.uploaded.clone(),
            style_prompt: inner.style_prompt.clone(),
            generated: inner.generated.clone(),
            request: inner.request.clone(),
        }
    }

    pub fn style_prompt(&self) -> String {
        self.inner.lock().style_prompt.clone()
    }

    pub fn set_style_prompt(&self, text: &str) {
        self.inner.lock().style_prompt = text.to_string();
    }

    pub fn generated_image(&self) -> Option<String> {
        self.inner.lock().generated.clone()
    }

    pub fn request_state(&self) -> RequestState {
        self.inner.lock().request.clone()
    }

    /// Stores a new source image, replacing any previous upload and clearing
    /// the current render and error. Valid in any state.
    pub fn upload(&self, bytes: Vec<u8>, declared_mime: Option<&str>) -> Result<(), WorkflowError> {
        let Some(mime_type) = supported_upload_mime(declared_mime, &bytes) else {
            let label = codec::detect_mime_type(&bytes)
                .or_else(|| declared_mime.map(str::to_string))
                .unwrap_or_else(|| "unknown".to_string());
            return Err(WorkflowError::UnsupportedImageType(label));
        };

        let image = codec::encode_bytes(&bytes, &mime_type)?;
        let preview = codec::to_data_url(&image);

        let mut inner = self.inner.lock();
        inner.uploaded = Some(UploadedImage { image, preview });
        inner.generated = None;
        inner.request = RequestState::Idle;
        Ok(())
    }

    /// First generation pass: renders a full building from the uploaded shape,
    /// framed with the current style text. Starts from a clean canvas; a
    /// failure leaves the upload in place with no render.
    pub async fn generate_initial<G: ImageGenerator>(
        &self,
        generator: &G,
    ) -> Result<String, WorkflowError> {
        let (image, instruction) = {
            let mut inner = self.inner.lock();
            if inner.request == RequestState::Pending {
                return Err(WorkflowError::RequestInFlight);
            }
            let Some(uploaded) = inner.uploaded.as_ref() else {
                return Err(WorkflowError::NoUploadedImage);
            };
            let image = uploaded.image.clone();
            let instruction = INITIAL_RENDER_PROMPT.replace("{style}", &inner.style_prompt);
            inner.generated = None;
            inner.request = RequestState::Pending;
            (image, instruction)
        };

        self.run_generation(generator, image, instruction).await
    }

    /// Follow-up pass: regenerates from the current render with a new
    /// instruction. The replacement is all-or-nothing; on failure the previous
    /// render stays displayed.
    pub async fn generate_follow_up<G: ImageGenerator>(
        &self,
        generator: &G,
        instruction: &str,
    ) -> Result<String, WorkflowError> {
        let image = {
            let mut inner = self.inner.lock();
            if inner.request == RequestState::Pending {
                return Err(WorkflowError::RequestInFlight);
            }
            let Some(current) = inner.generated.as_ref() else {
                return Err(WorkflowError::NoGeneratedImage);
            };
            match codec::parse_data_url(current) {
                Ok(image) => {
                    inner.request = RequestState::Pending;
                    image
                }
                Err(err) => {
                    inner.request = RequestState::Failed(err.to_string());
                    return Err(WorkflowError::Codec(err));
                }
            }
        };

        self.run_generation(generator, image, instruction.to_string())
            .await
    }

    pub async fn apply_view_option<G: ImageGenerator>(
        &self,
        generator: &G,
        option: &ViewOption,
    ) -> Result<String, WorkflowError> {
        self.generate_follow_up(generator, option.instruction).await
    }

    async fn run_generation<G: ImageGenerator>(
        &self,
        generator: &G,
        image: EncodedImage,
        instruction: String,
    ) -> Result<String, WorkflowError> {
        match generator.generate(&image, &instruction).await {
            Ok(data_url) => {
                let mut inner = self.inner.lock();
                inner.generated = Some(data_url.clone());
                inner.request = RequestState::Succeeded;
                Ok(data_url)
            }
            Err(err) => {
                let mut inner = self.inner.lock();
                inner.request = RequestState::Failed(err.to_string());
                Err(WorkflowError::Generation(err))
            }
        }
    }

    /// Writes the current render to `dir` under a timestamped filename and
    /// returns the path.
    pub fn save_current(&self, dir: &Path, prefix: &str) -> Result<PathBuf, WorkflowError> {
        let data_url = self
            .inner
            .lock()
            .generated
            .clone()
            .ok_or(WorkflowError::NoGeneratedImage)?;

        let image = codec::parse_data_url(&data_url)?;
        let bytes = codec::decode_payload(&image)?;

        std::fs::create_dir_all(dir).map_err(|err| WorkflowError::Save(err.to_string()))?;
        let path = dir.join(render_filename(prefix, Utc::now()));
        std::fs::write(&path, bytes).map_err(|err| WorkflowError::Save(err.to_string()))?;
        info!("Saved render to {}", path.display());
        Ok(path)
    }
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefers the MIME type detected from magic bytes over the declared one, and
/// accepts only the upload types the picker advertises.
fn supported_upload_mime(declared: Option<&str>, bytes: &[u8]) -> Option<String> {
    let mut candidates = Vec::new();
    if let Some(detected) = codec::detect_mime_type(bytes) {
        candidates.push(detected);
    }
    if let Some(declared) = declared {
        if !declared.trim().is_empty() {
            candidates.push(declared.to_string());
        }
    }

    for candidate in candidates {
        let normalized = codec::normalize_mime_type(&candidate);
        if SUPPORTED_UPLOAD_MIME_TYPES.contains(&normalized.as_str()) {
            return Some(normalized);
        }
    }

    None
}

/// `<prefix>-<ISO8601 with colons and dots replaced by dashes>.png`. The
/// extension stays `.png` whatever MIME the service returned.
pub fn render_filename(prefix: &str, now: DateTime<Utc>) -> String {
    let timestamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{prefix}-{timestamp}.png")
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::future::Future;

    use tokio::sync::Notify;

    use super::*;
    use crate::catalog;

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x01];

    #[derive(Default)]
    struct ScriptedGenerator {
        calls: Mutex<Vec<(EncodedImage, String)>>,
        responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    }

    impl ScriptedGenerator {
        fn new() -> Self {
            Self::default()
        }

        fn respond_with(response: Result<String, GenerationError>) -> Self {
            let generator = Self::new();
            generator.push(response);
            generator
        }

        fn push(&self, response: Result<String, GenerationError>) {
            self.responses.lock().push_back(response);
        }

        fn recorded_calls(&self) -> Vec<(EncodedImage, String)> {
            self.calls.lock().clone()
        }
    }

    impl ImageGenerator for ScriptedGenerator {
        fn generate(
            &self,
            image: &EncodedImage,
            instruction: &str,
        ) -> impl Future<Output = Result<String, GenerationError>> + Send {
            let image = image.clone();
            let instruction = instruction.to_string();
            async move {
                self.calls.lock().push((image, instruction));
                self.responses
                    .lock()
                    .pop_front()
                    .expect("unexpected generation call")
            }
        }
    }

    struct BlockingGenerator {
        entered: Notify,
        release: Notify,
        calls: Mutex<usize>,
    }

    impl BlockingGenerator {
        fn new() -> Self {
            BlockingGenerator {
                entered: Notify::new(),
                release: Notify::new(),
                calls: Mutex::new(0),
            }
        }
    }

    impl ImageGenerator for BlockingGenerator {
        fn generate(
            &self,
            _image: &EncodedImage,
            _instruction: &str,
        ) -> impl Future<Output = Result<String, GenerationError>> + Send {
            async move {
                *self.calls.lock() += 1;
                self.entered.notify_one();
                self.release.notified().await;
                Ok("data:image/png;base64,QkJCQg==".to_string())
            }
        }
    }

    fn studio_with_upload() -> StudioState {
        let studio = StudioState::new();
        studio
            .upload(PNG_BYTES.to_vec(), Some("image/png"))
            .expect("upload accepted");
        studio
    }

    #[tokio::test]
    async fn triggers_without_prerequisites_never_reach_the_client() {
        let studio = StudioState::new();
        let generator = ScriptedGenerator::new();

        let err = studio.generate_initial(&generator).await.unwrap_err();
        assert!(matches!(err, WorkflowError::NoUploadedImage));

        let err = studio
            .generate_follow_up(&generator, "show interior")
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::NoGeneratedImage));

        assert!(generator.recorded_calls().is_empty());
    }

    #[tokio::test]
    async fn initial_generation_stores_the_result() {
        let studio = studio_with_upload();
        studio.set_style_prompt("minimalist glass facade");
        let generator =
            ScriptedGenerator::respond_with(Ok("data:image/png;base64,AAAA".to_string()));

        let result = studio.generate_initial(&generator).await.unwrap();

        assert_eq!(result, "data:image/png;base64,AAAA");
        assert_eq!(
            studio.generated_image().as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(studio.request_state(), RequestState::Succeeded);

        let calls = generator.recorded_calls();
        assert_eq!(calls.len(), 1);
        let (image, instruction) = &calls[0];
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(
            *image,
            codec::encode_bytes(PNG_BYTES, "image/png").unwrap()
        );
        assert_eq!(
            *instruction,
            INITIAL_RENDER_PROMPT.replace("{style}", "minimalist glass facade")
        );
    }

    #[tokio::test]
    async fn failed_initial_generation_keeps_the_upload() {
        let studio = studio_with_upload();
        let generator =
            ScriptedGenerator::respond_with(Err(GenerationError::Request("boom".to_string())));

        let err = studio.generate_initial(&generator).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Generation(_)));

        let snapshot = studio.snapshot();
        assert!(snapshot.uploaded.is_some());
        assert!(snapshot.generated.is_none());
        assert!(matches!(snapshot.request, RequestState::Failed(ref msg) if msg.contains("boom")));
    }

    #[tokio::test]
    async fn failed_follow_up_keeps_the_previous_render() {
        let studio = studio_with_upload();
        let generator =
            ScriptedGenerator::respond_with(Ok("data:image/png;base64,AAAA".to_string()));
        studio.generate_initial(&generator).await.unwrap();

        generator.push(Err(GenerationError::Request(
            "model unavailable".to_string(),
        )));
        let err = studio
            .generate_follow_up(&generator, "show interior")
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Generation(_)));

        let snapshot = studio.snapshot();
        assert_eq!(
            snapshot.generated.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert!(snapshot.uploaded.is_some());
        assert!(
            matches!(snapshot.request, RequestState::Failed(ref msg) if msg.contains("model unavailable"))
        );
    }

    #[tokio::test]
    async fn view_options_send_their_exact_instruction_with_the_current_payload() {
        let studio = studio_with_upload();
        let generator =
            ScriptedGenerator::respond_with(Ok("data:image/png;base64,AAAA".to_string()));
        studio.generate_initial(&generator).await.unwrap();

        generator.push(Ok("data:image/png;base64,QkJCQg==".to_string()));
        let option = catalog::find_option("interior").expect("interior option");
        studio.apply_view_option(&generator, option).await.unwrap();

        let calls = generator.recorded_calls();
        assert_eq!(calls.len(), 2);
        let (image, instruction) = &calls[1];
        assert_eq!(image.base64, "AAAA");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(*instruction, option.instruction);
        assert_eq!(
            studio.generated_image().as_deref(),
            Some("data:image/png;base64,QkJCQg==")
        );
    }

    #[tokio::test]
    async fn a_pending_request_gates_every_trigger() {
        let studio = studio_with_upload();
        let generator = std::sync::Arc::new(BlockingGenerator::new());

        let task = tokio::spawn({
            let studio = studio.clone();
            let generator = generator.clone();
            async move { studio.generate_initial(&*generator).await }
        });

        generator.entered.notified().await;
        assert_eq!(studio.request_state(), RequestState::Pending);

        let err = studio.generate_initial(&*generator).await.unwrap_err();
        assert!(matches!(err, WorkflowError::RequestInFlight));
        let err = studio
            .generate_follow_up(&*generator, "show interior")
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::RequestInFlight));

        generator.release.notify_one();
        task.await.unwrap().unwrap();

        assert_eq!(*generator.calls.lock(), 1);
        assert_eq!(studio.request_state(), RequestState::Succeeded);
    }

    #[tokio::test]
    async fn a_new_upload_clears_the_render_and_error() {
        let studio = studio_with_upload();
        let generator =
            ScriptedGenerator::respond_with(Ok("data:image/png;base64,AAAA".to_string()));
        studio.generate_initial(&generator).await.unwrap();

        studio
            .upload(PNG_BYTES.to_vec(), Some("image/png"))
            .unwrap();

        let snapshot = studio.snapshot();
        assert!(snapshot.generated.is_none());
        assert_eq!(snapshot.request, RequestState::Idle);
        assert!(snapshot.uploaded.is_some());
    }

    #[test]
    fn unsupported_uploads_are_refused() {
        let studio = StudioState::new();
        let err = studio
            .upload(b"hello world".to_vec(), Some("text/plain"))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::UnsupportedImageType(_)));
        assert!(studio.snapshot().uploaded.is_none());
    }

    #[test]
    fn detected_mime_wins_over_a_contradicting_declared_type() {
        let studio = StudioState::new();
        studio
            .upload(PNG_BYTES.to_vec(), Some("image/webp"))
            .unwrap();
        let uploaded = studio.snapshot().uploaded.expect("upload stored");
        assert_eq!(uploaded.image.mime_type, "image/png");
        assert_eq!(uploaded.preview, codec::to_data_url(&uploaded.image));
    }

    #[tokio::test]
    async fn a_corrupt_stored_render_surfaces_a_parse_error() {
        let studio = studio_with_upload();
        let generator = ScriptedGenerator::respond_with(Ok("not-a-data-url".to_string()));
        studio.generate_initial(&generator).await.unwrap();

        let err = studio
            .generate_follow_up(&generator, "show interior")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Codec(CodecError::MalformedDataUrl)
        ));
        assert_eq!(generator.recorded_calls().len(), 1);
        assert!(matches!(studio.request_state(), RequestState::Failed(_)));
    }

    #[test]
    fn render_filenames_carry_a_dash_separated_timestamp() {
        use chrono::TimeZone;

        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let name = render_filename("architectural-render", now);
        assert_eq!(name, "architectural-render-2025-01-02T03-04-05-000Z.png");

        let stem = name.strip_suffix(".png").unwrap();
        assert!(!stem.contains(':') && !stem.contains('.'));
    }

    #[test]
    fn save_current_round_trips_the_render_bytes() {
        let studio = studio_with_upload();
        {
            let mut inner = studio.inner.lock();
            inner.generated = Some("data:image/png;base64,QUJDRA==".to_string());
            inner.request = RequestState::Succeeded;
        }

        let dir = std::env::temp_dir().join(format!("architect-vision-test-{}", std::process::id()));
        let path = studio
            .save_current(&dir, "architectural-render")
            .expect("save succeeds");

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, b"ABCD");
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn saving_without_a_render_is_an_input_error() {
        let studio = StudioState::new();
        let err = studio
            .save_current(Path::new("/tmp"), "architectural-render")
            .unwrap_err();
        assert!(matches!(err, WorkflowError::NoGeneratedImage));
    }
}
