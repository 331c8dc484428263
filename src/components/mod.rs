mod file_list;

mod header;

mod prompt;

mod sweeper;
pub use sweeper::{Props as SweeperProps, Sweeper};
