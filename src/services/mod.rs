pub mod recognizer;
pub mod vision;
