use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Exported contact file to split.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory the per-contact .vcf files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Display-name budget of the target address book (GSM feature phones
    /// show 15 characters).
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,

    /// VERSION line written into each output card.
    #[serde(default = "default_version_tag")]
    pub version_tag: String,
}

fn default_input() -> PathBuf {
    PathBuf::from("contacts.vcf")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("formatted_contacts")
}
fn default_max_name_len() -> usize {
    15
}
fn default_version_tag() -> String {
    "2.1".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: default_input(),
            output_dir: default_output_dir(),
            max_name_len: 15,
            version_tag: "2.1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("contacts.vcf"));
        assert_eq!(config.output_dir, PathBuf::from("formatted_contacts"));
        assert_eq!(config.max_name_len, 15);
        assert_eq!(config.version_tag, "2.1");
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "input": "export/all.vcf",
            "output_dir": "out",
            "max_name_len": 20,
            "version_tag": "3.0"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.input, PathBuf::from("export/all.vcf"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.max_name_len, 20);
        assert_eq!(config.version_tag, "3.0");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{"output_dir": "phones"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("phones"));
        assert_eq!(config.input, PathBuf::from("contacts.vcf"));
        assert_eq!(config.max_name_len, 15);
    }
}
