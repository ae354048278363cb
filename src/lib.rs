pub mod error;
pub mod linked_list;
pub mod partition;

pub use error::{ParseListError, Result};
pub use linked_list::ListNode;
pub use partition::partition;
