//! AI feedback collaborator interface

pub mod provider;

pub use provider::{
    annotate_shortlist, FeedbackProvider, StaticFeedbackProvider, PLACEHOLDER_FEEDBACK,
};
