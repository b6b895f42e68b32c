use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Repository that receives contribution issues.
pub const CONTRIB_REPO: &str = "mcmcatlas/mcmcatlas";

/// Artificial review delay before a submission resolves.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// GitHub rejects pre-filled issue links longer than this.
const MAX_URL_LEN: usize = 8000;

/// Category choices offered by the algorithm form.
pub const ALGORITHM_CATEGORIES: [&str; 6] = [
    "standard",
    "hmc",
    "parallel",
    "mixed",
    "adaptive",
    "specialized",
];

/// Category choices offered by the combined algorithm + package form.
pub const COMBINED_CATEGORIES: [&str; 7] = [
    "metropolis-hastings",
    "gibbs-sampler",
    "hmc",
    "parallel-tempering",
    "particle-filters",
    "differential-evolution",
    "t-walk",
];

/// Issue type choices offered by the report form.
pub const ISSUE_TYPES: [&str; 4] = ["bug", "feature", "improvement", "other"];

// ---------------------------------------------------------------------------
// Contribution kinds
// ---------------------------------------------------------------------------

/// The four contribution forms the atlas accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionKind {
    Algorithm,
    Package,
    AlgorithmPackage,
    Issue,
}

impl ContributionKind {
    pub const ALL: [ContributionKind; 4] = [
        ContributionKind::Algorithm,
        ContributionKind::Package,
        ContributionKind::AlgorithmPackage,
        ContributionKind::Issue,
    ];

    /// Kind slug used as the second issue label and in the title prefix.
    pub fn slug(self) -> &'static str {
        match self {
            ContributionKind::Algorithm => "algorithm",
            ContributionKind::Package => "package",
            ContributionKind::AlgorithmPackage => "algorithm-package",
            ContributionKind::Issue => "issue",
        }
    }

    /// Heading word in the issue body.
    pub fn heading(self) -> &'static str {
        match self {
            ContributionKind::Algorithm => "Algorithm",
            ContributionKind::Package => "Package",
            ContributionKind::AlgorithmPackage => "Algorithm-package",
            ContributionKind::Issue => "Issue",
        }
    }

    /// Title shown above the form.
    pub fn form_title(self) -> &'static str {
        match self {
            ContributionKind::Algorithm => "Add New Algorithm",
            ContributionKind::Package => "Add New Package",
            ContributionKind::AlgorithmPackage => "Add Algorithm + Package",
            ContributionKind::Issue => "Report Issue",
        }
    }

    /// Catalog documents a maintainer would touch when merging.
    pub fn data_files(self) -> &'static [&'static str] {
        match self {
            ContributionKind::Algorithm => &["data/algorithms.json"],
            ContributionKind::Package => &["data/packages.json"],
            ContributionKind::AlgorithmPackage => &["data/algorithms.json", "data/packages.json"],
            ContributionKind::Issue => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Form drafts
// ---------------------------------------------------------------------------

/// Field values of the algorithm form. All strings; empty means untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub package: String,
    pub example_code: String,
    pub contributor: String,
}

/// Field values of the package form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDraft {
    pub name: String,
    pub version: String,
    pub description: String,
    pub maintainer: String,
    pub cran_url: String,
    pub github_url: String,
    pub contributor: String,
}

/// Field values of the combined algorithm + package form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedDraft {
    pub algorithm_name: String,
    pub algorithm_category: String,
    pub algorithm_description: String,
    pub algorithm_example: String,
    pub package_name: String,
    pub package_version: String,
    pub package_description: String,
    pub package_maintainer: String,
    pub package_cran_url: String,
    pub package_github_url: String,
    pub contributor: String,
}

/// Field values of the issue report form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDraft {
    pub issue_type: String,
    pub title: String,
    pub description: String,
    pub reporter: String,
}

/// One filled-in contribution form.
///
/// Kept verbatim after a failed submission so the user can correct and retry
/// without re-typing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionDraft {
    Algorithm(AlgorithmDraft),
    Package(PackageDraft),
    AlgorithmPackage(CombinedDraft),
    Issue(IssueDraft),
}

impl ContributionDraft {
    /// Fresh empty draft for a form kind.
    pub fn empty(kind: ContributionKind) -> Self {
        match kind {
            ContributionKind::Algorithm => ContributionDraft::Algorithm(AlgorithmDraft::default()),
            ContributionKind::Package => ContributionDraft::Package(PackageDraft::default()),
            ContributionKind::AlgorithmPackage => {
                ContributionDraft::AlgorithmPackage(CombinedDraft::default())
            }
            ContributionKind::Issue => ContributionDraft::Issue(IssueDraft::default()),
        }
    }

    pub fn kind(&self) -> ContributionKind {
        match self {
            ContributionDraft::Algorithm(_) => ContributionKind::Algorithm,
            ContributionDraft::Package(_) => ContributionKind::Package,
            ContributionDraft::AlgorithmPackage(_) => ContributionKind::AlgorithmPackage,
            ContributionDraft::Issue(_) => ContributionKind::Issue,
        }
    }

    /// Labels of required fields that are still blank. Submission is only
    /// offered once this is empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let mut require = |value: &str, label: &'static str| {
            if value.trim().is_empty() {
                missing.push(label);
            }
        };
        match self {
            ContributionDraft::Algorithm(d) => {
                require(&d.name, "Algorithm Name");
                require(&d.category, "Category");
                require(&d.description, "Description");
                require(&d.package, "R Package");
                require(&d.contributor, "Your Name");
            }
            ContributionDraft::Package(d) => {
                require(&d.name, "Package Name");
                require(&d.version, "Version");
                require(&d.description, "Description");
                require(&d.maintainer, "Maintainer");
                require(&d.contributor, "Your Name");
            }
            ContributionDraft::AlgorithmPackage(d) => {
                require(&d.algorithm_name, "Algorithm Name");
                require(&d.algorithm_category, "Category");
                require(&d.algorithm_description, "Algorithm Description");
                require(&d.package_name, "Package Name");
                require(&d.package_version, "Version");
                require(&d.package_description, "Package Description");
                require(&d.package_maintainer, "Maintainer");
                require(&d.contributor, "Your Name");
            }
            ContributionDraft::Issue(d) => {
                require(&d.issue_type, "Issue Type");
                require(&d.title, "Title");
                require(&d.description, "Description");
                require(&d.reporter, "Your Name");
            }
        }
        missing
    }

    /// The name the draft is filed under: algorithm or package name for
    /// catalog contributions, the report title for issues.
    pub fn headline(&self) -> &str {
        match self {
            ContributionDraft::Algorithm(d) => &d.name,
            ContributionDraft::Package(d) => &d.name,
            ContributionDraft::AlgorithmPackage(d) => &d.algorithm_name,
            ContributionDraft::Issue(d) => &d.title,
        }
    }

    fn contributor_name(&self) -> &str {
        match self {
            ContributionDraft::Algorithm(d) => &d.contributor,
            ContributionDraft::Package(d) => &d.contributor,
            ContributionDraft::AlgorithmPackage(d) => &d.contributor,
            ContributionDraft::Issue(d) => &d.reporter,
        }
    }

    /// Catalog-shaped JSON embedded in the issue body. `date` is the
    /// `date_added` stamp, normally [`today`]. Blank optional fields are
    /// omitted rather than serialized empty.
    pub fn payload(&self, date: &str) -> Value {
        match self {
            ContributionDraft::Algorithm(d) => algorithm_payload(d, date),
            ContributionDraft::Package(d) => package_payload(d, date),
            ContributionDraft::AlgorithmPackage(d) => json!({
                "algorithm": algorithm_payload(&d.algorithm_part(), date),
                "package": package_payload(&d.package_part(), date),
            }),
            ContributionDraft::Issue(d) => json!({
                "type": d.issue_type,
                "title": d.title,
                "description": d.description,
                "reporter": d.reporter,
            }),
        }
    }

    /// Assemble the issue title, body, and labels for this draft.
    pub fn issue_request(&self, date: &str) -> IssueRequest {
        let kind = self.kind();
        let payload = serde_json::to_string_pretty(&self.payload(date)).unwrap_or_default();

        let mut body = format!(
            "## {} Contribution\n\n**Contributor:** {}\n**Date:** {}\n\n\
             ### Contribution Details\n```json\n{}\n```\n\n\
             ### Review Process\n\
             This contribution will be reviewed and added to the MCMC Atlas if approved.\n\n",
            kind.heading(),
            self.contributor_name(),
            date,
            payload,
        );

        let files = kind.data_files();
        if !files.is_empty() {
            body.push_str("### Files to modify\n");
            for file in files {
                body.push_str(&format!("- `{file}`\n"));
            }
            body.push('\n');
        }

        body.push_str(
            "### Review checklist\n\
             - [ ] Data format follows schema\n\
             - [ ] All required fields present\n\
             - [ ] Package/algorithm information is accurate\n\
             - [ ] Example code is valid (if provided)\n\
             - [ ] Links are working\n\
             - [ ] No duplicate entries\n\n\
             Thank you for contributing to the MCMC Atlas! 🎉",
        );

        IssueRequest {
            title: format!("[{}] {}", kind.slug().to_uppercase(), self.headline()),
            body,
            labels: vec!["contribution".to_string(), kind.slug().to_string()],
        }
    }
}

impl CombinedDraft {
    fn algorithm_part(&self) -> AlgorithmDraft {
        AlgorithmDraft {
            name: self.algorithm_name.clone(),
            category: self.algorithm_category.clone(),
            description: self.algorithm_description.clone(),
            package: self.package_name.clone(),
            example_code: self.algorithm_example.clone(),
            contributor: self.contributor.clone(),
        }
    }

    fn package_part(&self) -> PackageDraft {
        PackageDraft {
            name: self.package_name.clone(),
            version: self.package_version.clone(),
            description: self.package_description.clone(),
            maintainer: self.package_maintainer.clone(),
            cran_url: self.package_cran_url.clone(),
            github_url: self.package_github_url.clone(),
            contributor: self.contributor.clone(),
        }
    }
}

fn algorithm_payload(d: &AlgorithmDraft, date: &str) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(slugify(&d.name)));
    obj.insert("name".into(), json!(d.name));
    obj.insert("category".into(), json!(d.category));
    obj.insert("description".into(), json!(d.description));
    obj.insert(
        "packages".into(),
        json!([{
            "name": d.package,
            "function": "main_function",
            "description": "User-contributed implementation",
        }]),
    );
    if !d.example_code.trim().is_empty() {
        obj.insert("example_code".into(), json!(d.example_code));
    }
    obj.insert("contributor".into(), json!(d.contributor));
    obj.insert("date_added".into(), json!(date));
    Value::Object(obj)
}

fn package_payload(d: &PackageDraft, date: &str) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(d.name.to_lowercase()));
    obj.insert("name".into(), json!(d.name));
    obj.insert("version".into(), json!(d.version));
    obj.insert("description".into(), json!(d.description));
    obj.insert("maintainer".into(), json!(d.maintainer));
    if !d.cran_url.trim().is_empty() {
        obj.insert("cran_url".into(), json!(d.cran_url));
    }
    if !d.github_url.trim().is_empty() {
        obj.insert("github_url".into(), json!(d.github_url));
    }
    obj.insert("contributor".into(), json!(d.contributor));
    obj.insert("date_added".into(), json!(date));
    Value::Object(obj)
}

/// Lowercase, whitespace runs collapsed to single hyphens.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Today's date in the `date_added` format used by the catalog documents.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Issue links
// ---------------------------------------------------------------------------

/// Title, body, and labels of the issue a submission opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRequest {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Pre-filled issue-creation link on the contribution repository. Title and
/// body are percent-encoded; labels are comma-joined kind slugs and need no
/// encoding.
pub fn issue_url(repo: &str, request: &IssueRequest) -> String {
    format!(
        "https://github.com/{}/issues/new?title={}&body={}&labels={}",
        repo,
        urlencoding::encode(&request.title),
        urlencoding::encode(&request.body),
        request.labels.join(","),
    )
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Why a submission was rejected. The draft survives either way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("contribution repository {0:?} is not an owner/name slug")]
    InvalidRepo(String),
    #[error("issue link is {len} characters, over the {max} limit; shorten the example code")]
    LinkTooLong { len: usize, max: usize },
}

/// A packaged contribution ready to open in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub kind: ContributionKind,
    pub url: String,
}

pub type SubmitResult = Result<Submission, SubmitError>;

/// Package `draft` into a pre-filled issue link on `repo`.
pub fn submit(repo: &str, draft: &ContributionDraft) -> SubmitResult {
    if !is_repo_slug(repo) {
        return Err(SubmitError::InvalidRepo(repo.to_string()));
    }

    let request = draft.issue_request(&today());
    let url = issue_url(repo, &request);
    if url.len() > MAX_URL_LEN {
        return Err(SubmitError::LinkTooLong {
            len: url.len(),
            max: MAX_URL_LEN,
        });
    }

    Ok(Submission {
        kind: draft.kind(),
        url,
    })
}

/// Run [`submit`] on a worker thread after the review delay.
///
/// Returns a channel carrying exactly one result; the UI polls it each frame
/// while showing a "submitting" state.
pub fn spawn_submit(repo: String, draft: ContributionDraft) -> Receiver<SubmitResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        thread::sleep(SUBMIT_DELAY);
        let result = submit(&repo, &draft);
        match &result {
            Ok(submission) => {
                log::info!("{} contribution packaged for {repo}", submission.kind.slug());
            }
            Err(err) => log::error!("contribution rejected: {err}"),
        }
        let _ = tx.send(result);
    });
    rx
}

fn is_repo_slug(repo: &str) -> bool {
    let mut parts = repo.split('/');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(name), None) if is_slug_part(owner) && is_slug_part(name)
    )
}

fn is_slug_part(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm_draft() -> ContributionDraft {
        ContributionDraft::Algorithm(AlgorithmDraft {
            name: "Zig-Zag Sampler".to_string(),
            category: "specialized".to_string(),
            description: "Piecewise deterministic sampler".to_string(),
            package: "rjpdmp".to_string(),
            example_code: String::new(),
            contributor: "Ada".to_string(),
        })
    }

    #[test]
    fn algorithm_payload_slugs_the_name_and_omits_blank_example() {
        let payload = algorithm_draft().payload("2024-06-01");
        assert_eq!(payload["id"], "zig-zag-sampler");
        assert_eq!(payload["packages"][0]["function"], "main_function");
        assert_eq!(
            payload["packages"][0]["description"],
            "User-contributed implementation"
        );
        assert_eq!(payload["date_added"], "2024-06-01");
        assert!(payload.get("example_code").is_none());
    }

    #[test]
    fn package_payload_lowercases_the_id_and_omits_blank_urls() {
        let draft = ContributionDraft::Package(PackageDraft {
            name: "MCMCpack".to_string(),
            version: "1.7".to_string(),
            description: "Classic samplers".to_string(),
            maintainer: "JHP".to_string(),
            cran_url: String::new(),
            github_url: "https://github.com/cran/MCMCpack".to_string(),
            contributor: "Ada".to_string(),
        });
        let payload = draft.payload("2024-06-01");
        assert_eq!(payload["id"], "mcmcpack");
        assert!(payload.get("cran_url").is_none());
        assert_eq!(payload["github_url"], "https://github.com/cran/MCMCpack");
    }

    #[test]
    fn combined_payload_nests_both_parts() {
        let draft = ContributionDraft::AlgorithmPackage(CombinedDraft {
            algorithm_name: "Elliptical Slice".to_string(),
            algorithm_category: "gibbs-sampler".to_string(),
            algorithm_description: "Slice sampling on an ellipse".to_string(),
            package_name: "elliptic".to_string(),
            package_version: "0.2".to_string(),
            package_description: "Elliptical slice sampling".to_string(),
            package_maintainer: "M. Murray".to_string(),
            contributor: "Ada".to_string(),
            ..Default::default()
        });
        let payload = draft.payload("2024-06-01");
        assert_eq!(payload["algorithm"]["id"], "elliptical-slice");
        assert_eq!(payload["algorithm"]["packages"][0]["name"], "elliptic");
        assert_eq!(payload["package"]["id"], "elliptic");
        assert_eq!(payload["package"]["contributor"], "Ada");
    }

    #[test]
    fn issue_title_prefixes_the_uppercased_kind_slug() {
        let request = algorithm_draft().issue_request("2024-06-01");
        assert_eq!(request.title, "[ALGORITHM] Zig-Zag Sampler");
        assert_eq!(request.labels, ["contribution", "algorithm"]);

        let combined =
            ContributionDraft::empty(ContributionKind::AlgorithmPackage).issue_request("2024-06-01");
        assert!(combined.title.starts_with("[ALGORITHM-PACKAGE] "));
    }

    #[test]
    fn issue_body_embeds_payload_and_checklist() {
        let request = algorithm_draft().issue_request("2024-06-01");
        assert!(request.body.starts_with("## Algorithm Contribution\n"));
        assert!(request.body.contains("**Contributor:** Ada"));
        assert!(request.body.contains("```json"));
        assert!(request.body.contains("\"id\": \"zig-zag-sampler\""));
        assert!(request.body.contains("- `data/algorithms.json`"));
        assert!(request.body.contains("- [ ] No duplicate entries"));
        assert!(request.body.ends_with("🎉"));
    }

    #[test]
    fn issue_reports_touch_no_data_files() {
        let draft = ContributionDraft::Issue(IssueDraft {
            issue_type: "bug".to_string(),
            title: "Broken search".to_string(),
            description: "Searching for coda shows nothing".to_string(),
            reporter: "Grace".to_string(),
        });
        let request = draft.issue_request("2024-06-01");
        assert!(!request.body.contains("Files to modify"));
        assert_eq!(request.title, "[ISSUE] Broken search");
    }

    #[test]
    fn issue_url_percent_encodes_title_and_body() {
        let request = algorithm_draft().issue_request("2024-06-01");
        let url = issue_url(CONTRIB_REPO, &request);
        assert!(url.starts_with("https://github.com/mcmcatlas/mcmcatlas/issues/new?title="));
        assert!(url.contains("%5BALGORITHM%5D%20Zig-Zag%20Sampler"));
        assert!(url.ends_with("&labels=contribution,algorithm"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn missing_fields_track_blank_required_inputs() {
        let draft = AlgorithmDraft {
            name: "NUTS".to_string(),
            contributor: "  ".to_string(),
            ..Default::default()
        };
        let missing = ContributionDraft::Algorithm(draft).missing_fields();
        assert!(missing.contains(&"Category"));
        assert!(missing.contains(&"Your Name"));
        assert!(!missing.contains(&"Algorithm Name"));

        assert!(algorithm_draft().missing_fields().is_empty());
    }

    #[test]
    fn submit_rejects_malformed_repositories() {
        for repo in ["", "mcmcatlas", "a/b/c", "bad name/repo"] {
            match submit(repo, &algorithm_draft()) {
                Err(SubmitError::InvalidRepo(r)) => assert_eq!(r, repo),
                other => panic!("{repo:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn submit_rejects_oversized_links() {
        let draft = AlgorithmDraft {
            name: "Giant".to_string(),
            category: "standard".to_string(),
            description: "big".to_string(),
            package: "pkg".to_string(),
            example_code: "x <- rnorm(1)\n".repeat(2000),
            contributor: "Ada".to_string(),
        };
        let result = submit(CONTRIB_REPO, &ContributionDraft::Algorithm(draft));
        assert!(matches!(result, Err(SubmitError::LinkTooLong { .. })));
    }

    #[test]
    fn submit_packages_a_complete_draft() {
        let submission = submit(CONTRIB_REPO, &algorithm_draft()).unwrap();
        assert_eq!(submission.kind, ContributionKind::Algorithm);
        assert!(submission.url.contains("issues/new?title="));
    }
}
