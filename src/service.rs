//! Static metadata describing the gist stars badge: where it is routed, how
//! it is documented and which example drives its preview. None of this is on
//! the request path; it is consumed by whatever serves or documents badges.

use crate::badge::BadgeDefaults;
use crate::gist_stars::GistStarsParams;
use crate::text::metric;
use serde::Serialize;

pub const DEFAULT_BADGE: BadgeDefaults = BadgeDefaults {
    label: "Stars",
    color: "blue",
    named_logo: "github",
};

pub const EXAMPLE_GIST_ID: &str = "47a4d00457a92aa426dbd48a18776322";

/// Shared by every GitHub badge.
pub const GITHUB_DOCUMENTATION: &str = "<p>
  GitHub badges are fetched with the token configured through
  <code>GITHUB_TOKEN</code>. If a badge errors, check that the token is valid
  and has not hit GitHub's rate limits.
</p>";

const GIST_DOCUMENTATION: &str = "<p>This badge shows the number of stargazers for a gist. Gist id is accepted as input and 'gist not found' is returned if the gist is not found for the given gist id.
</p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub base: &'static str,
    pub pattern: &'static str,
}

impl Route {
    /// Concrete path for documentation, e.g. `/github/stars/gists/<id>`.
    pub fn example_path(&self, params: &GistStarsParams) -> String {
        format!("/{}/{}", self.base, params.gist_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPreview {
    pub label: String,
    pub message: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub title: String,
    pub named_params: GistStarsParams,
    pub static_preview: StaticPreview,
    pub documentation: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    pub name: &'static str,
    pub category: &'static str,
    pub route: Route,
    pub default_badge_data: BadgeDefaults,
    pub examples: Vec<Example>,
}

pub const GIST_STARS_ROUTE: Route = Route {
    base: "github/stars/gists",
    pattern: ":gistId",
};

pub fn documentation() -> String {
    format!("{}\n{}", GITHUB_DOCUMENTATION, GIST_DOCUMENTATION)
}

pub fn gist_stars_service() -> ServiceDefinition {
    let named_params = GistStarsParams {
        gist_id: EXAMPLE_GIST_ID.to_string(),
    };

    ServiceDefinition {
        name: "GithubGistStars",
        category: "social",
        route: GIST_STARS_ROUTE,
        default_badge_data: DEFAULT_BADGE,
        examples: vec![Example {
            title: "Github Gist stars".to_string(),
            path: GIST_STARS_ROUTE.example_path(&named_params),
            named_params,
            static_preview: StaticPreview {
                label: DEFAULT_BADGE.label.to_string(),
                message: metric(29),
                style: "social".to_string(),
            },
            documentation: documentation(),
        }],
    }
}
