mod propose_and_rename;
mod secretary;
mod tombstone_many;

use super::*;
