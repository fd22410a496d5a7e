//! Top-level application state: which image is selected, whether a
//! prediction is in flight and what came back.
//!
//! [`Shell::update`] is the only way to change state. It returns at most one
//! [`Effect`] for the host to run; the host feeds the outcome back as
//! [`Msg::Settled`].

use crate::client::PredictionService;
use crate::error::AppError;
use crate::prediction::Prediction;

/// Issued per submission. A settlement is applied only while its token is
/// the one the shell is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Empty,
    Submitting(RequestToken),
    Succeeded(Prediction),
    Failed(AppError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug)]
pub enum Msg<I> {
    /// A new file from the picker, or `None` when the picker was cleared.
    Select(Option<I>),
    Submit,
    Settled(RequestToken, Result<Prediction, AppError>),
    Dismiss,
    Reset,
}

#[derive(Debug, PartialEq)]
pub enum Effect<I> {
    Predict { token: RequestToken, image: I },
}

impl<I> Effect<I> {
    pub async fn run<S>(self, service: &S) -> Msg<I>
    where
        S: PredictionService<Image = I>,
    {
        match self {
            Effect::Predict { token, image } => {
                Msg::Settled(token, service.predict(&image).await)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shell<I> {
    selection: Option<I>,
    status: Status,
    issued: u64,
}

impl<I> Default for Shell<I> {
    fn default() -> Self {
        Self {
            selection: None,
            status: Status::Empty,
            issued: 0,
        }
    }
}

impl<I: Clone> Shell<I> {
    pub fn update(&mut self, msg: Msg<I>) -> Option<Effect<I>> {
        match msg {
            Msg::Select(image) => {
                self.selection = image;
                self.status = Status::Empty;
                None
            }
            Msg::Submit => self.submit(),
            Msg::Settled(token, outcome) => {
                self.settle(token, outcome);
                None
            }
            Msg::Dismiss => {
                if matches!(self.status, Status::Failed(_)) {
                    self.status = Status::Empty;
                }
                None
            }
            Msg::Reset => {
                self.selection = None;
                self.status = Status::Empty;
                None
            }
        }
    }

    fn submit(&mut self) -> Option<Effect<I>> {
        match self.status {
            Status::Submitting(_) | Status::Succeeded(_) => return None,
            Status::Empty | Status::Failed(_) => {}
        }

        let Some(image) = self.selection.clone() else {
            self.status = Status::Failed(AppError::Validation);
            return None;
        };

        self.issued += 1;
        let token = RequestToken(self.issued);
        self.status = Status::Submitting(token);
        Some(Effect::Predict { token, image })
    }

    fn settle(&mut self, token: RequestToken, outcome: Result<Prediction, AppError>) {
        if self.status != Status::Submitting(token) {
            log::debug!("Ignoring stale prediction for {:?}", token);
            return;
        }
        self.status = match outcome {
            Ok(prediction) => {
                log::info!(
                    "Prediction: {} ({})",
                    prediction.disease,
                    prediction.percent_label()
                );
                Status::Succeeded(prediction)
            }
            Err(err) => {
                log::warn!("Prediction failed: {}", err);
                Status::Failed(err)
            }
        };
    }
}

impl<I> Shell<I> {
    pub fn phase(&self) -> Phase {
        match &self.status {
            Status::Empty if self.selection.is_some() => Phase::Ready,
            Status::Empty => Phase::Idle,
            Status::Submitting(_) => Phase::Submitting,
            Status::Succeeded(_) => Phase::Succeeded,
            Status::Failed(_) => Phase::Failed,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn selection(&self) -> Option<&I> {
        self.selection.as_ref()
    }

    pub fn loading(&self) -> bool {
        matches!(self.status, Status::Submitting(_))
    }

    pub fn result(&self) -> Option<&Prediction> {
        match &self.status {
            Status::Succeeded(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match &self.status {
            Status::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the "Analyze" button should be offered.
    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && self.result().is_none()
    }
}
