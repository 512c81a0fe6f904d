use super::*;

#[test]
fn can_measure_elapsed_time() {
    let probe = SystemProbe::default();
    let start = probe.elapsed_millis();

    std::thread::sleep(std::time::Duration::from_millis(5));

    assert!(probe.elapsed_millis() - start >= 5);
}

#[cfg(target_os = "linux")]
#[test]
fn can_read_resident_memory() {
    assert!(SystemProbe::default().memory_usage() > 0);
}
