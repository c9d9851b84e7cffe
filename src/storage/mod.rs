mod idea_store;

pub use idea_store::{IdeaPatch, IdeaStore, NewIdea};
