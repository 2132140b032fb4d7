mod app;
mod message;
mod screens;
mod widgets;

pub use app::{LearnTechApp, run};
pub use message::Message;
