mod handler;
mod parse;
mod types;

pub use handler::RequestForwarder;
pub use parse::extract_text;
pub use types::{
    INPUT_LABEL, INPUT_TYPE_TEXT, InboundEvent, ModelInput, ModelRequest, OutboundResponse,
};
