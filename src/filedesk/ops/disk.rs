//! Disk-space report over a fixed set of mount points.

use crate::ops::{CmdMessage, CmdResult};
use nix::sys::statvfs::statvfs;

/// The mount points the report always covers.
pub const MOUNT_POINTS: [&str; 4] = ["/", "/boot", "/var/log", "/home"];

const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Query every mount point and report total/free/available space in
/// whole GiB. A mount point that cannot be queried produces a warning
/// instead of failing the report.
pub fn report(mount_points: &[&str]) -> CmdResult {
    let mut result = CmdResult::default();

    for path in mount_points {
        match statvfs(*path) {
            Ok(stat) => {
                let fragment = stat.fragment_size() as u64;
                let total = stat.blocks() as u64 * fragment;
                let free = stat.blocks_free() as u64 * fragment;
                let available = stat.blocks_available() as u64 * fragment;

                result.lines.push(format!("Disk usage for {}:", path));
                result
                    .lines
                    .push(format!("  Total: {} GiB", total / BYTES_PER_GIB));
                result
                    .lines
                    .push(format!("  Free: {} GiB", free / BYTES_PER_GIB));
                result
                    .lines
                    .push(format!("  Available: {} GiB", available / BYTES_PER_GIB));
                result.lines.push("-----------------------------".to_string());
            }
            Err(err) => result.add_message(CmdMessage::warning(format!(
                "Cannot query {}: {}",
                path, err
            ))),
        }
    }

    result
}
