pub mod ask;
pub mod defect;
pub mod dispatch;
pub mod init;
pub mod proof;
pub mod scenario;
pub mod step;
