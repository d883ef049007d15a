use assert_fs::prelude::*;
use predicates::prelude::*;

use roi_calculator::domain::inputs::RawInputs;
use roi_calculator::services::saved_state::read_saved_inputs;

#[test]
fn sanitize_writes_clamped_state_to_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("state.json");
    input
        .write_str(r#"{"integrationCost": -1, "monthlySalary": "lots", "hoursPerWeek": 500, "companySize": 12}"#)
        .unwrap();
    let output = temp.child("clean.json");

    let mut cmd = assert_cmd::cargo_bin_cmd!("roi");
    cmd.args([
        "sanitize",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sanitized state written to"));

    let sanitized = read_saved_inputs(output.path()).unwrap();
    assert_eq!(
        sanitized,
        RawInputs {
            integration_cost: 0.0,
            monthly_salary: 50_000.0,
            hours_per_week: 168.0,
            error_correction_hours: 2.0,
            company_size: Some(70.0),
        }
    );
}

#[test]
fn sanitize_overwrites_input_by_default() {
    let input = assert_fs::NamedTempFile::new("state.json").unwrap();
    input.write_str(r#"{"hoursPerWeek": -4}"#).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("roi");
    cmd.args(["sanitize", "-i", input.path().to_str().unwrap()]);
    cmd.assert().success();

    let sanitized = read_saved_inputs(input.path()).unwrap();
    assert_eq!(sanitized.hours_per_week, 0.0);
}

#[test]
fn sanitize_fails_for_unreadable_state() {
    let input = assert_fs::NamedTempFile::new("state.json").unwrap();
    input.write_str("not json").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("roi");
    cmd.args(["sanitize", "-i", input.path().to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read saved state"));
}
