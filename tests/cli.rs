use assert_cmd::Command;
use predicates::prelude::predicate::str;

const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

const SPLIT: &str = "\
Valve AA has flow rate=0; tunnels lead to valves BB, XX
Valve BB has flow rate=10; tunnel leads to valve AA
Valve XX has flow rate=0; tunnels lead to valves AA, CC
Valve CC has flow rate=8; tunnel leads to valve XX
";

#[test]
fn day16a_output_right_answer() {
    let mut cmd = Command::cargo_bin("day16a").unwrap();
    cmd.write_stdin(EXAMPLE);

    cmd.assert().success().stdout(str::diff("1651\n"));
}

#[test]
fn day16a_zero_time() {
    let mut cmd = Command::cargo_bin("day16a").unwrap();
    cmd.arg("--time").arg("0").write_stdin(EXAMPLE);

    cmd.assert().success().stdout(str::diff("0\n"));
}

#[test]
fn day16a_negative_time() {
    let mut cmd = Command::cargo_bin("day16a").unwrap();
    cmd.arg("--time=-1").write_stdin(EXAMPLE);

    cmd.assert().failure().stderr(str::contains("must not be negative"));
}

#[test]
fn day16a_reads_file() {
    let path = std::env::temp_dir().join(format!("valve_itinerary_{}.txt", std::process::id()));
    std::fs::write(&path, EXAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("day16a").unwrap();
    cmd.arg(&path);
    let assert = cmd.assert();
    std::fs::remove_file(&path).unwrap();

    assert.success().stdout(str::diff("1651\n"));
}

#[test]
fn day16a_missing_file() {
    let mut cmd = Command::cargo_bin("day16a").unwrap();
    cmd.arg("no/such/scan.txt");

    cmd.assert().failure().stderr(str::contains("Failed to read valve scan"));
}

#[test]
fn day16a_undefined_neighbor() {
    let mut cmd = Command::cargo_bin("day16a").unwrap();
    cmd.write_stdin("Valve AA has flow rate=0; tunnel leads to valve ZZ\n");

    cmd.assert().failure().stderr(str::contains("undefined room ZZ"));
}

#[test]
fn day16a_missing_start() {
    let mut cmd = Command::cargo_bin("day16a").unwrap();
    cmd.arg("--start").arg("QQ").write_stdin(EXAMPLE);

    cmd.assert().failure().stderr(str::contains("start room QQ is not defined"));
}

#[test]
fn day16b_output_right_answer() {
    let mut cmd = Command::cargo_bin("day16b").unwrap();
    cmd.write_stdin(EXAMPLE);

    cmd.assert().success().stdout(str::diff("1327\n"));
}

#[test]
fn day16b_splits_valves() {
    let mut cmd = Command::cargo_bin("day16b").unwrap();
    cmd.arg("--time").arg("4").write_stdin(SPLIT);

    cmd.assert().success().stdout(str::diff("28\n"));
}

#[test]
fn day16b_bad_line() {
    let mut cmd = Command::cargo_bin("day16b").unwrap();
    cmd.write_stdin("Valve AA has no valve at all\n");

    cmd.assert().failure().stderr(str::contains("unexpected line format"));
}

#[test]
fn day16a_huge_flow_rate() {
    let mut cmd = Command::cargo_bin("day16a").unwrap();
    cmd.write_stdin(
        "Valve AA has flow rate=0; tunnel leads to valve BB\n\
         Valve BB has flow rate=18446744073709551615; tunnel leads to valve AA\n",
    );

    cmd.assert().failure().stderr(str::contains("released pressure overflows"));
}
