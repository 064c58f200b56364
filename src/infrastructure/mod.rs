//! Infrastructure layer
//! 외부 시스템(SQLite/터미널/소켓/파일시스템)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
pub mod line_editor;
pub mod render;
pub mod store;
