use jiff::Timestamp;
use uuid::Uuid;

/// Build a destination URI that cannot collide with earlier output
///
/// Shape: `gs://<bucket>/<prefix>-<utc timestamp>-<random>.wav`. The random
/// suffix keeps two requests landing in the same second apart.
pub fn output_uri(bucket: &str, prefix: &str) -> String {
    let stamp = Timestamp::now().strftime("%Y%m%d-%H%M%S");
    let suffix = Uuid::new_v4().simple();

    format!("gs://{bucket}/{prefix}-{stamp}-{suffix}.wav")
}
