mod delete_owned;
mod list_range;

use super::*;
