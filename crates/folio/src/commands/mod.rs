pub mod export;
pub mod init;
pub mod preview;
pub mod themes;
