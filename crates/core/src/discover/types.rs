use std::path::PathBuf;

/// A file eligible for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Absolute path of the source file.
    pub path: PathBuf,
    /// School id parsed from the file name, kept verbatim so leading zeros
    /// survive into the lookup path.
    pub school_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_file_keeps_id_as_text() {
        let candidate = CandidateFile {
            path: PathBuf::from("/data/007.pdf"),
            school_id: "007".to_string(),
        };
        assert_eq!(candidate.school_id, "007");
    }
}
