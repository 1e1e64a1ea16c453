use super::*;

use std::{
    cell::Cell,
    collections::HashMap,
    fs::{File, create_dir, write},
    path::Path,
    rc::Rc,
    time::{Duration, SystemTime},
};

use acmewin_client::{Window, WindowId};
use anyhow::{Result, anyhow};

/// In-memory acme with per-window `ctl` contents.
#[derive(Default)]
struct FakeAcme {
    windows: Vec<WinInfo>,
    ctl: HashMap<WindowId, Vec<u8>>,
    unreadable: Vec<WindowId>,
    index_broken: bool,
    open_handles: Rc<Cell<usize>>,
}

impl FakeAcme {
    fn add(&mut self, id: WindowId, name: impl Into<String>, dirty: bool) -> &mut Self {
        self.windows.push(WinInfo {
            id,
            name: name.into(),
        });
        let flag = if dirty { "1" } else { "0" };
        self.ctl.insert(
            id,
            format!("{id} 0 0 0 {flag} 640 font 4 ").into_bytes(),
        );
        self
    }
}

struct FakeWindow {
    ctl: Vec<u8>,
    readable: bool,
    open_handles: Rc<Cell<usize>>,
}

impl Window for FakeWindow {
    fn read_all(&mut self, file: &str) -> Result<Vec<u8>> {
        if !self.readable || file != "ctl" {
            return Err(anyhow!("read {file}: i/o error"));
        }
        Ok(self.ctl.clone())
    }
}

impl Drop for FakeWindow {
    fn drop(&mut self) {
        self.open_handles.set(self.open_handles.get() - 1);
    }
}

impl WindowService for FakeAcme {
    fn windows(&self) -> Result<Vec<WinInfo>> {
        if self.index_broken {
            return Err(anyhow!("acme is not running"));
        }
        Ok(self.windows.clone())
    }

    fn open(&self, id: WindowId) -> Result<Box<dyn Window>> {
        let ctl = self
            .ctl
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow!("window {id} does not exist"))?;
        self.open_handles.set(self.open_handles.get() + 1);
        Ok(Box::new(FakeWindow {
            ctl,
            readable: !self.unreadable.contains(&id),
            open_handles: Rc::clone(&self.open_handles),
        }))
    }
}

fn touch(path: &Path, secs: u64) -> SystemTime {
    let when = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
    write(path, b"content").expect("write file");
    File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(when))
        .expect("set mtime");
    when
}

fn path_str(path: &Path) -> String {
    path.to_str().expect("utf-8 temp path").to_owned()
}

#[test]
fn builds_one_record_per_window() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("a.txt");
    let mtime = touch(&file, 1_700_000_000);

    let mut acme = FakeAcme::default();
    acme.add(1, path_str(&file), true)
        .add(2, "+Errors", false)
        .add(3, path_str(&file), false);

    let records = scan(&acme, ScanOptions::default()).expect("scan");
    assert_eq!(
        records,
        vec![
            WindowRecord {
                id: 1,
                name: path_str(&file),
                dirty: true,
                mod_time: Some(mtime),
            },
            WindowRecord {
                id: 2,
                name: "+Errors".into(),
                dirty: false,
                mod_time: None,
            },
            WindowRecord {
                id: 3,
                name: path_str(&file),
                dirty: false,
                mod_time: Some(mtime),
            },
        ]
    );
    assert_eq!(acme.open_handles.get(), 0, "every handle must be closed");
}

#[test]
fn directories_are_kept_without_filter() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let dir = tmp.path().join("src");
    create_dir(&dir).expect("create dir");

    let mut acme = FakeAcme::default();
    acme.add(4, path_str(&dir), false);

    let records = scan(&acme, ScanOptions::default()).expect("scan");
    assert_eq!(records.len(), 1);
    assert!(records[0].mod_time.is_some());
}

#[test]
fn file_only_keeps_regular_files() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("main.rs");
    touch(&file, 1_000);
    let dir = tmp.path().join("src");
    create_dir(&dir).expect("create dir");
    let missing = tmp.path().join("gone.txt");

    let mut acme = FakeAcme::default();
    acme.add(1, path_str(&dir), true)
        .add(2, path_str(&missing), true)
        .add(3, path_str(&file), false)
        .add(4, "+Errors", false);

    let records = scan(&acme, ScanOptions { file_only: true }).expect("scan");
    let ids: Vec<WindowId> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(acme.open_handles.get(), 0);
}

#[test]
fn list_ranked_orders_records() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let older = tmp.path().join("older.txt");
    let newer = tmp.path().join("newer.txt");
    touch(&older, 1_000);
    touch(&newer, 2_000);

    let mut acme = FakeAcme::default();
    acme.add(1, path_str(&older), false)
        .add(2, "+Errors", false)
        .add(3, path_str(&newer), false)
        .add(4, path_str(&older), true)
        .add(5, "scratch", true);

    let records = list_ranked(&acme, ScanOptions::default()).expect("scan");
    let ids: Vec<WindowId> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 4, 3, 1, 2]);
}

#[test]
fn enumeration_failure_is_fatal() {
    let acme = FakeAcme {
        index_broken: true,
        ..Default::default()
    };

    let err = scan(&acme, ScanOptions::default()).expect_err("must fail");
    assert!(matches!(err, ScanError::Enumeration { .. }));
    assert_eq!(
        err.to_string(),
        "could not get acme windows: acme is not running"
    );
}

#[test]
fn open_failure_names_window() {
    let mut acme = FakeAcme::default();
    acme.add(1, "+Errors", false);
    acme.windows.push(WinInfo {
        id: 9,
        name: "/tmp/vanished".into(),
    });

    let err = scan(&acme, ScanOptions::default()).expect_err("must fail");
    assert!(matches!(err, ScanError::HandleOpen { id: 9, .. }));
    assert_eq!(
        err.to_string(),
        "could not open window (/tmp/vanished, 9): window 9 does not exist"
    );
    assert_eq!(acme.open_handles.get(), 0);
}

#[test]
fn read_failure_is_fatal_and_closes_handle() {
    let mut acme = FakeAcme::default();
    acme.add(2, "notes", true);
    acme.unreadable.push(2);

    let err = scan(&acme, ScanOptions::default()).expect_err("must fail");
    assert!(matches!(err, ScanError::Read { id: 2, .. }));
    assert!(err.to_string().starts_with("could not read ctl file of (notes, 2)"));
    assert_eq!(acme.open_handles.get(), 0);
}

#[test]
fn malformed_ctl_aborts() {
    let cases: &[(&str, usize)] = &[
        ("1 0 0 0 1 640 font", 7),
        ("1 0 0 0 1 640 font 4 9", 9),
    ];

    for (ctl, got) in cases {
        let mut acme = FakeAcme::default();
        acme.add(1, "+Errors", false);
        acme.ctl.insert(1, ctl.as_bytes().to_vec());

        let err = scan(&acme, ScanOptions::default()).expect_err("must fail");
        assert_eq!(
            err.to_string(),
            format!("unexpected number of fields for (+Errors, 1): wanted 8, got {got}"),
            "ctl {ctl:?}"
        );
        assert_eq!(acme.open_handles.get(), 0);
    }
}

#[test]
fn non_boolean_dirty_flag_is_clean() {
    let mut acme = FakeAcme::default();
    acme.add(1, "+Errors", true);
    acme.ctl.insert(1, b"1 0 0 0 perhaps 640 font 4".to_vec());

    let records = scan(&acme, ScanOptions::default()).expect("scan");
    assert!(!records[0].dirty);
}

#[cfg(unix)]
#[test]
fn stat_failure_other_than_not_found_is_fatal() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("plain");
    touch(&file, 1_000);
    let bogus = file.join("child");

    let mut acme = FakeAcme::default();
    acme.add(6, path_str(&bogus), false);

    let err = scan(&acme, ScanOptions::default()).expect_err("must fail");
    assert!(matches!(err, ScanError::Stat { id: 6, .. }));
    assert!(
        err.to_string()
            .starts_with(&format!("could not stat disk file of ({}, 6)", path_str(&bogus))),
        "unexpected message: {err}"
    );
}

#[test]
fn empty_window_list_is_fine() {
    let acme = FakeAcme::default();
    let records = list_ranked(&acme, ScanOptions { file_only: true }).expect("scan");
    assert!(records.is_empty());
}
