pub mod aggregate;
pub mod pagination;
pub mod permission;
pub mod requester;
pub mod tags;
pub mod term;
pub mod visibility;

pub use aggregate::{TAG_PAGE_SIZE, TagCount, TagPage, aggregate_tags};
pub use pagination::{Page, paginate, parse_page_number};
pub use permission::{PERMISSION_DENIED_MESSAGE, PermissionGate};
pub use requester::Requester;
pub use tags::{dedup_tag_names, require_all_tags};
pub use term::{MAX_TERM_NAME_CHARS, Term};
pub use visibility::{is_visible, visible_subset};
