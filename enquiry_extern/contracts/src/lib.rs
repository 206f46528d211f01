pub mod form_sink;
