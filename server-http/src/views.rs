use orgboard::github::{Organisation, User};

/// Minimal HTML escaping for text interpolated into views.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Sign-in page, optionally carrying an error from a failed login attempt.
pub fn login_page(login_url: &str, error: Option<&str>) -> String {
    let error_html = error
        .map(|e| format!("<p class=\"error\">{}</p>", escape(e)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>orgboard</title></head>\n<body>\n\
         <h1>orgboard</h1>\n{}\
         <p><a href=\"{}\">Sign in with GitHub</a></p>\n\
         </body>\n</html>\n",
        error_html,
        escape(login_url)
    )
}

/// Dashboard listing the user's organisations.
pub fn dashboard_page(user: &User, orgs: &[Organisation]) -> String {
    let display_name = user.name.as_deref().unwrap_or(&user.login);

    let org_items: String = orgs
        .iter()
        .map(|org| {
            let avatar = org
                .avatar_url
                .as_deref()
                .map(|url| format!("<img src=\"{}\" width=\"32\" alt=\"\"> ", escape(url)))
                .unwrap_or_default();
            format!("<li>{}{}</li>\n", avatar, escape(&org.login))
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>orgboard</title></head>\n<body>\n\
         <h1>Hello, {}</h1>\n\
         <h2>Your organisations</h2>\n<ul>\n{}</ul>\n\
         <form method=\"post\" action=\"/logout\"><button type=\"submit\">Sign out</button></form>\n\
         </body>\n</html>\n",
        escape(display_name),
        org_items
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_escapes_error() {
        let page = login_page("https://github.com/login/oauth/authorize?x=1", Some("<bad>"));
        assert!(page.contains("&lt;bad&gt;"));
        assert!(!page.contains("<bad>"));
    }

    #[test]
    fn test_dashboard_lists_orgs() {
        let user = User {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            avatar_url: None,
            organizations_url: "https://api.github.com/users/octocat/orgs".to_string(),
        };
        let orgs = vec![Organisation {
            login: "octo-org".to_string(),
            repos_url: "https://api.github.com/orgs/octo-org/repos".to_string(),
            avatar_url: Some("https://a/1".to_string()),
        }];

        let page = dashboard_page(&user, &orgs);
        assert!(page.contains("The Octocat"));
        assert!(page.contains("octo-org"));
        assert!(page.contains("https://a/1"));
    }
}
