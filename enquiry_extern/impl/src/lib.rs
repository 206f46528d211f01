pub mod form_sink;
pub mod http;
