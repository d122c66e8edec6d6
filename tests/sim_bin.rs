use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    let sunk_human = v["sunk"]["human"].as_u64().unwrap();
    let sunk_computer = v["sunk"]["computer"].as_u64().unwrap();
    assert!(sunk_human == 7 || sunk_computer == 7);
    assert!(v["history"].is_array());
}
