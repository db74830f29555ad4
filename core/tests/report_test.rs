use m3ucheck_core::models::comparison::{ComparisonResult, ModifiedEntry};
use m3ucheck_core::models::report::{notification_body, render_comparison, SourceReport};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ComparisonResult {
        let mut result = ComparisonResult::default();
        result
            .added
            .insert("Channel B".to_string(), Some("pipe://cmd2".to_string()));
        result
            .removed
            .insert("Channel C".to_string(), "pipe://cmd3".to_string());
        result.modified.push(ModifiedEntry {
            name: "Channel D".to_string(),
            playlist_pipe: Some("pipe://new".to_string()),
            backend_url: "pipe://old".to_string(),
        });
        result
    }

    #[test]
    fn test_empty_result() {
        assert_eq!(
            render_comparison(&ComparisonResult::default()),
            "No changes detected."
        );
    }

    #[test]
    fn test_all_sections() {
        let expected = "Added streams:\n\
            + Channel B: pipe://cmd2\n\
            Removed streams:\n\
            - Channel C: pipe://cmd3\n\
            Modified streams:\n\
            * Channel D changed:\n  Playlist: pipe://new\n  Backend: pipe://old";
        assert_eq!(render_comparison(&sample_result()), expected);
    }

    #[test]
    fn test_only_non_empty_sections() {
        let mut result = ComparisonResult::default();
        result
            .removed
            .insert("Channel C".to_string(), "pipe://cmd3".to_string());

        let text = render_comparison(&result);
        assert_eq!(text, "Removed streams:\n- Channel C: pipe://cmd3");
        assert!(!text.contains("Added streams:"));
        assert!(!text.contains("Modified streams:"));
        assert!(!text.contains("No changes detected."));
    }

    #[test]
    fn test_absent_pipe_rendering() {
        let mut result = ComparisonResult::default();
        result.added.insert("Bare".to_string(), None);
        assert_eq!(render_comparison(&result), "Added streams:\n+ Bare: <none>");
    }

    #[test]
    fn test_source_report_blocks() {
        let checked = SourceReport::Checked {
            playlist_url: "http://lists/a.m3u".to_string(),
            network_name: "A".to_string(),
            comparison: ComparisonResult::default(),
        };
        assert_eq!(
            checked.to_string(),
            "Results for playlist http://lists/a.m3u:\nNo changes detected.\n"
        );

        let failed = SourceReport::Failed {
            playlist_url: "http://lists/b.m3u".to_string(),
            network_name: "B".to_string(),
            message: "HTTP 404 Not Found from http://lists/b.m3u".to_string(),
        };
        assert_eq!(
            failed.to_string(),
            "Error fetching playlist http://lists/b.m3u: HTTP 404 Not Found from http://lists/b.m3u"
        );
    }

    #[test]
    fn test_notification_body() {
        let reports = vec![
            SourceReport::Checked {
                playlist_url: "http://lists/a.m3u".to_string(),
                network_name: "A".to_string(),
                comparison: sample_result(),
            },
            SourceReport::Failed {
                playlist_url: "http://lists/b.m3u".to_string(),
                network_name: "B".to_string(),
                message: "timed out".to_string(),
            },
        ];

        let body = notification_body(&reports);
        let (summary, details) = body.split_once("Details:").unwrap();

        let summary_lines: Vec<&str> = summary
            .lines()
            .skip(2)
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(
            summary_lines,
            vec!["+ Channel B", "- Channel C", "* Channel D changed"]
        );

        assert!(summary.starts_with("Summary:\n-----"));
        assert!(details.contains(&reports[0].to_string()));
        assert!(details.ends_with("Error fetching playlist http://lists/b.m3u: timed out"));
    }

    #[test]
    fn test_notification_body_without_changes() {
        let reports = vec![SourceReport::Checked {
            playlist_url: "http://lists/a.m3u".to_string(),
            network_name: "A".to_string(),
            comparison: ComparisonResult::default(),
        }];

        let body = notification_body(&reports);
        let (summary, _) = body.split_once("Details:").unwrap();
        assert_eq!(summary.lines().filter(|l| !l.is_empty()).count(), 2);
        assert!(body.contains("No changes detected."));
    }
}
