mod openai;
mod scripted;

pub use openai::OpenAiChatModel;
pub use scripted::{ScriptedCall, ScriptedChatModel};
