//! Line-in, reply-out scenarios against the shipped command set.

use alloc::string::String;
use alloc::vec::Vec;

use crate::camera::{self, BurstSettings, Camera, CameraState, SharedCamera, SimCamera};
use crate::console::BufferOutput;
use crate::shell::commands::CommandHistory;
use crate::shell::{CommandRegistry, Dispatched, builtin_registry};

struct Bench {
    registry: CommandRegistry,
    camera: SharedCamera<SimCamera>,
}

impl Bench {
    fn new() -> Self {
        let camera = camera::shared(SimCamera::new(BurstSettings {
            interval_ms: 500,
            ..BurstSettings::default()
        }));
        let registry = builtin_registry(Some(camera.clone()), CommandHistory::shared()).unwrap();
        Self { registry, camera }
    }

    fn send(&self, line: &str) -> String {
        let mut out = BufferOutput::new();
        self.registry.dispatch(line, &mut out);
        out.take()
    }
}

#[test]
fn test_burst_reference_session() {
    let bench = Bench::new();
    let session = [
        ("burst on", "OK\r\n"),
        ("burst", "ON\r\n"),
        ("burst fast", "OK\r\n"),
        ("burst", "FAST\r\n"),
        ("burst off", "OK\r\n"),
        ("burst", "OFF\r\n"),
        ("burst frames 0", "OK\r\n"),
        ("burst frames", "1\r\n"),
        ("burst interval", "500\r\n"),
        ("burst interval 125", "OK\r\n"),
        ("burst interval", "125\r\n"),
        ("burst bogus", "ERROR: Invalid burst command!\r\n"),
    ];
    for (line, reply) in session {
        assert_eq!(bench.send(line), reply, "line: {line}");
    }
}

#[test]
fn test_queries_never_write() {
    let bench = Bench::new();
    for line in ["burst", "burst frames", "burst interval", "BURST INTERVAL"] {
        let reply = bench.send(line);
        assert_eq!(reply.matches("\r\n").count(), 1, "line: {line}");
    }
    assert_eq!(bench.camera.lock().writes(), 0);
}

#[test]
fn test_busy_blocks_every_action() {
    let bench = Bench::new();
    bench.camera.lock().set_state(CameraState::Storing);
    let before = bench.camera.lock().settings();

    for line in ["burst on", "burst fast", "burst off", "burst frames 3", "burst interval 9"] {
        assert_eq!(bench.send(line), "BUSY\r\n");
    }
    assert_eq!(bench.camera.lock().settings(), before);
}

#[test]
fn test_failures_do_not_poison_later_lines() {
    let bench = Bench::new();
    assert_eq!(bench.send("flash on"), "ERROR: Unknown command: flash\r\n");
    assert_eq!(bench.send("burst interval soon"), "ERROR: Invalid interval!\r\n");
    assert_eq!(bench.send("   "), "");
    assert_eq!(bench.send("Burst On"), "OK\r\n");
    assert!(bench.camera.lock().burst_enable());
}

#[test]
fn test_builtin_names_resolve_in_any_case() {
    let bench = Bench::new();
    let names: Vec<&str> = bench.registry.all_commands().map(|c| c.name()).collect();
    assert_eq!(names, ["help", "history", "burst"]);

    for line in ["HELP", "History", "?", "bURST"] {
        let mut out = BufferOutput::new();
        assert_ne!(bench.registry.dispatch(line, &mut out), Dispatched::Unknown);
    }
}
