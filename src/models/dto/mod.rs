pub mod request;

pub use request::QuizRequest;
