mod decrement_if_enough;
mod increment_or_create;
mod set;

use super::*;
