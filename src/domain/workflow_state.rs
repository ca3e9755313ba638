use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    AwaitingUrl,
    AwaitingAlias,
    Creating,
    Done,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal workflow transition {from:?} -> {to:?}")]
pub struct IllegalTransition {
    pub from: WorkflowState,
    pub to: WorkflowState,
}

impl WorkflowState {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Idle => "WORKFLOW_IDLE",
            Self::AwaitingUrl => "WORKFLOW_AWAITING_URL",
            Self::AwaitingAlias => "WORKFLOW_AWAITING_ALIAS",
            Self::Creating => "WORKFLOW_CREATING",
            Self::Done => "WORKFLOW_DONE",
            Self::Cancelled => "WORKFLOW_CANCELLED",
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::AwaitingUrl)
                | (Self::AwaitingUrl, Self::AwaitingAlias)
                | (Self::AwaitingUrl, Self::Cancelled)
                | (Self::AwaitingAlias, Self::Creating)
                | (Self::AwaitingAlias, Self::Cancelled)
                | (Self::Creating, Self::Done)
        )
    }

    pub fn transition_to(self, next: Self) -> Result<Self, IllegalTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(IllegalTransition {
                from: self,
                to: next,
            })
        }
    }
}
