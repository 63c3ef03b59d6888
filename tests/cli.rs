use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn bezelshot_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bezelshot").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_screenshot(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([30, 200, 90, 255]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    bezelshot_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Composite app screenshots into device mock-ups",
        ));
}

#[test]
fn devices_lists_catalog() {
    let temp = TempDir::new().unwrap();
    bezelshot_cmd(temp.path())
        .arg("devices")
        .assert()
        .success()
        .stdout(predicate::str::contains("iphone-6.9"))
        .stdout(predicate::str::contains("1320 x 2868"))
        .stdout(predicate::str::contains("Android tablet:"));
}

#[test]
fn render_requires_an_image() {
    let temp = TempDir::new().unwrap();
    bezelshot_cmd(temp.path())
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn unknown_device_fails() {
    let temp = TempDir::new().unwrap();
    bezelshot_cmd(temp.path())
        .args(["render", "--image", "missing.png", "--device", "nokia-3310"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown device 'nokia-3310'"));
}

#[test]
fn mismatched_screenshot_is_rejected() {
    let temp = TempDir::new().unwrap();
    let image = write_screenshot(temp.path(), "small.png", 54, 96);

    bezelshot_cmd(temp.path())
        .args(["render", "--device", "android-phone", "--image"])
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1080 x 1920"));
}

#[test]
fn render_writes_png_for_device() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let image = write_screenshot(temp.path(), "small.png", 54, 96);

    bezelshot_cmd(temp.path())
        .args([
            "render",
            "--device",
            "android-phone",
            "--allow-any-size",
            "--font-family",
            "sans-serif",
            "--message",
            "Plan trips\\nwith friends",
            "--image",
        ])
        .arg(&image)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("app-store-screenshot-android-phone.png"));

    let rendered = image::open(out.join("app-store-screenshot-android-phone.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(rendered.dimensions(), (1080, 1920));
    // Default background
    assert_eq!(rendered.get_pixel(2, 1917).0, [0x00, 0x99, 0xFF, 255]);
}

#[test]
fn several_images_get_numbered_files() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let first = write_screenshot(temp.path(), "a.png", 40, 80);
    let second = write_screenshot(temp.path(), "b.png", 40, 80);

    bezelshot_cmd(temp.path())
        .args(["render", "--device", "android-phone", "--allow-any-size"])
        .arg("--image")
        .arg(&first)
        .arg("--image")
        .arg(&second)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("app-store-screenshot-android-phone-1.png").exists());
    assert!(out.join("app-store-screenshot-android-phone-2.png").exists());
}

#[test]
fn malformed_color_names_the_field() {
    let temp = TempDir::new().unwrap();
    let image = write_screenshot(temp.path(), "small.png", 54, 96);

    bezelshot_cmd(temp.path())
        .args([
            "render",
            "--device",
            "android-phone",
            "--allow-any-size",
            "--background-color",
            "blue",
            "--image",
        ])
        .arg(&image)
        .arg("--output-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid background_color 'blue'"));
}

#[test]
fn config_export_resolves_device_preset() {
    let temp = TempDir::new().unwrap();
    bezelshot_cmd(temp.path())
        .args(["config", "--export", "--device", "iphone-6.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("device = \"iphone-6.5\""))
        .stdout(predicate::str::contains("[bezel]"))
        .stdout(predicate::str::contains("size_factor"));
}

#[test]
fn config_init_then_path() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join("bezelshot").join("config.toml");

    bezelshot_cmd(temp.path())
        .args(["config", "--init"])
        .assert()
        .success();
    assert!(expected.exists());

    bezelshot_cmd(temp.path())
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bezelshot"));

    bezelshot_cmd(temp.path())
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_reports_the_file_it_loaded() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("team.toml");
    std::fs::write(&custom, "device = \"ipad-11\"\n").unwrap();

    bezelshot_cmd(temp.path())
        .args(["config", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("team.toml"))
        .stdout(predicate::str::contains("Device: ipad-11"));
}

#[test]
fn save_failures_do_not_stop_the_batch() {
    let temp = TempDir::new().unwrap();
    let first = write_screenshot(temp.path(), "a.png", 40, 80);
    let second = write_screenshot(temp.path(), "b.png", 40, 80);
    // A regular file where the output directory should be
    let blocked = temp.path().join("not-a-dir");
    std::fs::write(&blocked, "").unwrap();

    bezelshot_cmd(temp.path())
        .args(["render", "--device", "android-phone", "--allow-any-size"])
        .arg("--image")
        .arg(&first)
        .arg("--image")
        .arg(&second)
        .arg("--output-dir")
        .arg(&blocked)
        .assert()
        .failure()
        .stderr(predicate::str::contains("a.png: Failed to save mock-up"))
        .stderr(predicate::str::contains("b.png: Failed to save mock-up"))
        .stderr(predicate::str::contains("2 of 2 mock-ups failed"));
}
