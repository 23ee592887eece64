// SPDX-License-Identifier: GPL-2.0-only

//! Decode `git count-objects` output.

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

lazy_static! {
    static ref TERSE_COUNT: Regex = Regex::new(r"^([0-9]+) objects?, ([0-9]+) kilobytes?$")
        .expect("terse count-objects pattern is valid");
}

/// Object database statistics from `git count-objects`.
///
/// Sizes are in KiB. Only the loose object fields are reported without `-v`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ObjectCount {
    pub loose_object_count: u64,
    pub loose_object_size_kib: u64,
    pub in_pack_count: Option<u64>,
    pub pack_count: Option<u64>,
    pub pack_size_kib: Option<u64>,

    /// Loose objects also present in packs, removable with `git prune-packed`.
    pub prunable_packed_count: Option<u64>,

    /// Files in the object database that are neither valid loose objects nor packs.
    pub garbage_file_count: Option<u64>,
    pub garbage_size_kib: Option<u64>,
}

/// Decode either the terse `N objects, M kilobytes` line or the verbose
/// `key: value` report.
///
/// The `count` and `size` keys are required. Other unknown keys are ignored.
pub fn parse_count_objects(output: &str) -> Result<ObjectCount> {
    let output = output.trim();
    if output.is_empty() {
        return Err(Error::MissingField("count"));
    }

    if !output.contains('\n') && !output.contains(':') {
        parse_terse(output)
    } else {
        parse_verbose(output)
    }
}

fn parse_terse(line: &str) -> Result<ObjectCount> {
    let captures = TERSE_COUNT
        .captures(line)
        .ok_or_else(|| Error::MalformedCount(line.to_string()))?;
    Ok(ObjectCount {
        loose_object_count: parse_value("count", &captures[1])?,
        loose_object_size_kib: parse_value("size", &captures[2])?,
        ..Default::default()
    })
}

fn parse_verbose(report: &str) -> Result<ObjectCount> {
    let mut count = None;
    let mut size = None;
    let mut object_count = ObjectCount::default();

    for line in report.lines().filter(|line| !line.trim().is_empty()) {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| Error::MalformedCount(line.to_string()))?;
        let key = key.trim();
        let value = value.trim();
        let field = match key {
            "count" => &mut count,
            "size" => &mut size,
            "in-pack" => &mut object_count.in_pack_count,
            "packs" => &mut object_count.pack_count,
            "size-pack" => &mut object_count.pack_size_kib,
            "prune-packable" => &mut object_count.prunable_packed_count,
            "garbage" => &mut object_count.garbage_file_count,
            "size-garbage" => &mut object_count.garbage_size_kib,
            _ => continue,
        };
        *field = Some(parse_value(key, value)?);
    }

    object_count.loose_object_count = count.ok_or(Error::MissingField("count"))?;
    object_count.loose_object_size_kib = size.ok_or(Error::MissingField("size"))?;
    Ok(object_count)
}

fn parse_value(key: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| Error::InvalidFieldValue(key.to_string(), value.to_string()))
}
