/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::common;
use jsubnorm::file_utils::FileManager;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.ass", "content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

#[test]
fn test_dir_exists_withExistingDir_shouldReturnTrue() {
    assert!(FileManager::dir_exists("."));
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

#[test]
fn test_generate_output_path_withSuffix_shouldInsertBeforeExtension() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/input/episode01.ass"),
        Path::new("/tmp/output"),
        "normalized",
    );

    assert_eq!(output_path, Path::new("/tmp/output/episode01.normalized.ass"));
}

#[test]
fn test_generate_output_path_withEmptySuffix_shouldKeepName() {
    let output_path = FileManager::generate_output_path(Path::new("ep.srt"), Path::new("out"), "");
    assert_eq!(output_path, Path::new("out/ep.srt"));
}

#[test]
fn test_find_subtitle_files_withMixedFiles_shouldReturnSortedSubtitlesOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "b.srt", "")?;
    common::create_test_file(root, "a.ass", "")?;
    common::create_test_file(root, "season2/c.SSA", "")?;
    common::create_test_file(root, "notes.txt", "")?;
    common::create_test_file(root, "video.mkv", "")?;

    let files = FileManager::find_subtitle_files(root, "normalized")?;

    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, vec!["a.ass", "b.srt", "season2/c.SSA"]);

    Ok(())
}

#[test]
fn test_find_subtitle_files_withPreviousOutputs_shouldSkipThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "ep01.ass", "")?;
    common::create_test_file(root, "ep01.normalized.ass", "")?;

    let files = FileManager::find_subtitle_files(root, "normalized")?;

    assert_eq!(files, vec![root.join("ep01.ass")]);
    Ok(())
}

#[test]
fn test_write_to_file_withMissingParent_shouldCreateAndReplace() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("file.ass");

    FileManager::write_to_file(&path, "first")?;
    FileManager::write_to_file(&path, "second")?;

    assert_eq!(FileManager::read_to_string(&path)?, "second");
    let leftovers = fs::read_dir(path.parent().unwrap())?.count();
    assert_eq!(leftovers, 1);

    Ok(())
}

#[test]
fn test_read_to_string_withMissingFile_shouldNamePath() {
    let err = FileManager::read_to_string("missing_12345.ass").unwrap_err();
    assert!(err.to_string().contains("missing_12345.ass"));
}
