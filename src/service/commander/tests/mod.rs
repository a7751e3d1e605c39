mod delete_commander;

use chrono::{Duration, Utc};
use dockyard_test_utils::prelude::*;

use super::*;
use crate::{error::ErrorKind, util::time::FixedClock};
