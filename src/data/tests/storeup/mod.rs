mod last_index;
mod try_advance;

use super::*;
