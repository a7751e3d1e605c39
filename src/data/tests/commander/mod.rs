mod create;
mod increment_exchange_count;
mod tombstone;

use super::*;
