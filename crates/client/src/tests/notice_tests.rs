// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Notice, NoticeLevel};
use time::macros::datetime;

#[test]
fn test_raised_clock_shows_time_of_day() {
    let mut notice: Notice = Notice::error("Failed to merge debaters.");
    notice.raised_at = datetime!(2026-03-14 17:42:09 UTC);

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.raised_clock(), "17:42:09");
}

#[test]
fn test_raised_clock_pads_single_digits() {
    let mut notice: Notice = Notice::warning("Please select at least two judges.");
    notice.raised_at = datetime!(2026-01-02 03:04:05 UTC);

    assert_eq!(notice.raised_clock(), "03:04:05");
}
