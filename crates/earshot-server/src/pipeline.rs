//! Transcribe-then-complete orchestration for one upload

use std::{fmt, sync::Arc};

use earshot_core::HttpError;
use earshot_llm::{Completer, CompletionRequest, LlmError};
use stt::{Stager, Transcriber, UploadedAudio};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::ProcessError;

/// Progress of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Transcribing,
    Completing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Transcribing => "transcribing",
            Self::Completing => "completing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub transcript: String,
    pub answer: String,
}

/// Collaborators shared by every request, built once at start-up
pub struct Pipeline {
    stager: Stager,
    transcriber: Arc<dyn Transcriber>,
    completer: Arc<dyn Completer>,
    completion_model: String,
}

impl Pipeline {
    pub fn new(
        stager: Stager,
        transcriber: Arc<dyn Transcriber>,
        completer: Arc<dyn Completer>,
        completion_model: String,
    ) -> Self {
        Self {
            stager,
            transcriber,
            completer,
            completion_model,
        }
    }

    /// Transcribe the upload, then complete the transcript
    ///
    /// The two calls run strictly in sequence. Staged audio is dropped, and
    /// any temp file removed, before the completion call starts or as soon as
    /// the run fails.
    pub(crate) async fn run(&self, upload: UploadedAudio) -> Result<PipelineOutput, ProcessError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "pipeline",
            %request_id,
            transcriber = self.transcriber.name(),
            completer = self.completer.name(),
        );

        self.run_stages(upload, request_id).instrument(span).await
    }

    async fn run_stages(&self, upload: UploadedAudio, request_id: Uuid) -> Result<PipelineOutput, ProcessError> {
        let mut run = Run::default();

        run.advance(Stage::Transcribing);
        let transcript = match self.transcribe(upload, request_id).await {
            Ok(text) => text,
            Err(e) => return Err(run.fail(e)),
        };

        run.advance(Stage::Completing);
        let answer = match self.complete(&transcript).await {
            Ok(answer) => answer,
            Err(e) => return Err(run.fail(e)),
        };

        run.advance(Stage::Done);
        Ok(PipelineOutput { transcript, answer })
    }

    async fn transcribe(&self, upload: UploadedAudio, request_id: Uuid) -> Result<String, ProcessError> {
        let staged = self
            .stager
            .stage(upload, request_id)
            .await
            .map_err(|e| ProcessError::Staging(e.client_message()))?;

        let result = self.transcriber.transcribe(&staged).await;
        drop(staged);

        match result {
            Ok(response) => Ok(response.text),
            Err(e) if e.is_staging() => Err(ProcessError::Staging(e.client_message())),
            Err(e) => Err(ProcessError::Transcription(e.client_message())),
        }
    }

    async fn complete(&self, transcript: &str) -> Result<String, ProcessError> {
        let request = CompletionRequest::single_user_message(self.completion_model.as_str(), transcript);

        let response = self
            .completer
            .complete(&request)
            .await
            .map_err(|e| ProcessError::Completion(e.client_message()))?;

        response
            .first_choice()
            .map(str::to_owned)
            .ok_or_else(|| ProcessError::Completion(LlmError::NoChoices.client_message()))
    }
}

#[derive(Debug)]
struct Run {
    stage: Stage,
}

impl Default for Run {
    fn default() -> Self {
        Self { stage: Stage::Idle }
    }
}

impl Run {
    fn advance(&mut self, next: Stage) {
        tracing::debug!(from = %self.stage, to = %next, "pipeline stage");
        self.stage = next;
    }

    fn fail(&mut self, error: ProcessError) -> ProcessError {
        tracing::debug!(from = %self.stage, error = %error, "pipeline failed");
        self.stage = Stage::Failed;
        error
    }
}
