//! ZIP archive assembly.
//!
//! Streams planned entries into a new zip file. The archive is written in
//! plan order, one entry at a time, copying each source through a small
//! fixed buffer.

use crate::PackError;
use crate::ProgressCallback;
use crate::Result;
use crate::config::PackConfig;
use crate::creation::plan::PackPlan;
use crate::creation::plan::PlannedEntry;
use crate::creation::plan::plan_pack;
use crate::report::PackReport;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Size of the buffer used to copy each source file into its entry.
pub const COPY_BUFFER_SIZE: usize = 4 * 1024;

/// Entries at or above this size need zip64 headers.
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Plans and writes the archive for `config`.
///
/// Refuses to run if the archive already exists. Nothing is written before
/// that check.
///
/// # Examples
///
/// ```no_run
/// use ncpack_core::ModLayout;
/// use ncpack_core::NoopProgress;
/// use ncpack_core::PackConfig;
/// use ncpack_core::creation::zip::create_pack;
///
/// let config = PackConfig::new(ModLayout::from_root("/mods")?, "John", "1.0");
/// let report = create_pack(&config, &mut NoopProgress)?;
/// println!("Packed {} files", report.files_added);
/// # Ok::<(), ncpack_core::PackError>(())
/// ```
///
/// # Errors
///
/// - [`PackError::OutputExists`] if the archive file is already present
/// - any traversal, I/O or zip error; a partial archive stays on disk
pub fn create_pack(
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<PackReport> {
    let archive_path = config.archive_path();
    ensure_absent(&archive_path)?;

    let plan = plan_pack(config)?;
    write_plan(&plan, progress)
}

/// Writes an existing plan to `plan.archive_path`.
///
/// The file is opened with create-new semantics, so an archive that appeared
/// after planning is still never overwritten.
///
/// # Errors
///
/// Same as [`create_pack`].
pub fn write_plan(plan: &PackPlan, progress: &mut dyn ProgressCallback) -> Result<PackReport> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&plan.archive_path)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                PackError::OutputExists {
                    path: plan.archive_path.clone(),
                }
            } else {
                PackError::Io(e)
            }
        })?;

    write_pack(file, plan, progress)
}

/// Writes the planned entries into any seekable writer.
///
/// # Errors
///
/// Returns an error if a source file cannot be read or the zip writer fails.
pub fn write_pack<W: Write + Seek>(
    writer: W,
    plan: &PackPlan,
    progress: &mut dyn ProgressCallback,
) -> Result<PackReport> {
    let mut zip = ZipWriter::new(writer);
    let mut report = PackReport {
        files_excluded: plan.files_excluded(),
        files_rejected: plan.files_rejected(),
        links_skipped: plan.links_skipped(),
        ..PackReport::default()
    };
    let start = Instant::now();

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let total = plan.total_files();
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for (idx, entry) in plan.entries().enumerate() {
        progress.on_entry_start(&entry.source, total, idx + 1);
        let copied = add_file_to_zip(&mut zip, entry, options, progress, &mut buffer)?;
        progress.on_entry_complete(&entry.source);

        report.files_added += 1;
        report.bytes_written += copied;
        report.entries.push(entry.name.clone());
    }

    let mut inner = zip.finish()?;
    report.bytes_compressed = inner.stream_position()?;
    report.duration = start.elapsed();

    progress.on_complete();

    Ok(report)
}

/// Starts an entry and streams one source file into it.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &PlannedEntry,
    options: SimpleFileOptions,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<u64> {
    let mut file = File::open(&entry.source)?;
    let options = options.large_file(entry.size >= ZIP64_THRESHOLD);

    zip.start_file(entry.name.as_str(), options)?;
    let copied = copy_with_buffer(&mut file, zip, buffer, progress)?;

    Ok(copied)
}

fn copy_with_buffer<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut [u8],
    progress: &mut dyn ProgressCallback,
) -> Result<u64> {
    let mut copied = 0u64;
    loop {
        let bytes_read = match reader.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        writer.write_all(&buffer[..bytes_read])?;
        copied += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }
    Ok(copied)
}

fn ensure_absent(path: &Path) -> Result<()> {
    // symlink_metadata so a dangling link at the output name also counts
    if std::fs::symlink_metadata(path).is_ok() {
        return Err(PackError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
