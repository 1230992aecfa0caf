pub mod form_errors;
