//! Interface layer
//! CLI 파싱, REPL 명령 분배, TCP 서버 진입점을 제공한다.

pub mod cli;
pub mod server;
