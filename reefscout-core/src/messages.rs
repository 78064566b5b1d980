//! User-visible strings shown in the results container and status label.

pub const SEARCHING: &str = "Searching...";
pub const HIDE_LIST: &str = "Hide List";
pub const SHOW_LIST: &str = "Show List";

pub const NO_TEXT_MATCHES: &str = "No sites found. Try another search.";
pub const NEED_INPUT: &str = "Enter a search term or add a pin to the map";
pub const NEED_INPUT_STATUS: &str = "Enter a search term or add a pin";
pub const SEARCH_FAILED: &str = "Something went wrong. Please try again.";
pub const BUCKET_LIST_FAILED: &str = "Could not update your bucket list.";

pub fn no_nearby_sites(radius: u32) -> String {
    format!("No sites found within {} miles of dropped pin.", radius)
}
