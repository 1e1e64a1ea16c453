use log::{debug, warn};

use crate::{WinInfo, WindowId};

/// Fields per index line before the tag text starts: id, tag length, body
/// length, is-directory, is-dirty. The window name is the next field.
const NAME_FIELD: usize = 5;

/// Parse the content of acme's `index` file.
///
/// Lines too short to carry a name are ignored, as are lines whose id is
/// not a number.
pub fn parse_index(data: &[u8]) -> Vec<WinInfo> {
    let text = String::from_utf8_lossy(data);
    let mut windows = Vec::new();

    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() <= NAME_FIELD {
            if !fields.is_empty() {
                debug!("[index] skipping short line {line:?}");
            }
            continue;
        }

        let id = match fields[0].parse::<WindowId>() {
            Ok(id) => id,
            Err(e) => {
                warn!("[index] skipping line with bad window id {:?}: {e}", fields[0]);
                continue;
            }
        };

        windows.push(WinInfo {
            id,
            name: fields[NAME_FIELD].to_owned(),
        });
    }

    windows
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
