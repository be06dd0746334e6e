// ============================================================================
// ROUTE - Tabla estática de rutas (path -> página)
// ============================================================================

use std::borrow::Cow;

/// Páginas del portal. Las rutas con `:id` llevan el parámetro ya decodificado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Directory,
    Explore,
    RealEstate,
    PropertyDetail { id: String },
    Auth,
    About,
    Jobs,
    Freelancers,
    Stars,
    Saved,
    Fm,
    Contact,
    Advertise,
    SubmitListing,
    BusinessDetail { id: String },
    Admin,
}

impl Route {
    /// Reconoce un path. Tolera una barra final (`/jobs/`), nunca prefijos.
    pub fn recognize(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        let static_route = match trimmed {
            "/" | "" => Some(Route::Home),
            "/directory" => Some(Route::Directory),
            "/explore" => Some(Route::Explore),
            "/realestate" => Some(Route::RealEstate),
            "/auth" => Some(Route::Auth),
            "/about" => Some(Route::About),
            "/jobs" => Some(Route::Jobs),
            "/freelancers" => Some(Route::Freelancers),
            "/stars" => Some(Route::Stars),
            "/saved" => Some(Route::Saved),
            "/fm" => Some(Route::Fm),
            "/contact" => Some(Route::Contact),
            "/advertise" => Some(Route::Advertise),
            "/submit-listing" => Some(Route::SubmitListing),
            "/admin" => Some(Route::Admin),
            _ => None,
        };
        if static_route.is_some() {
            return static_route;
        }

        if let Some(id) = single_param(trimmed, "/property/") {
            return Some(Route::PropertyDetail { id });
        }
        if let Some(id) = single_param(trimmed, "/business/") {
            return Some(Route::BusinessDetail { id });
        }
        None
    }

    /// Path canónico de la ruta (con el id re-codificado)
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Directory => "/directory".to_string(),
            Route::Explore => "/explore".to_string(),
            Route::RealEstate => "/realestate".to_string(),
            Route::PropertyDetail { id } => format!("/property/{}", urlencoding::encode(id)),
            Route::Auth => "/auth".to_string(),
            Route::About => "/about".to_string(),
            Route::Jobs => "/jobs".to_string(),
            Route::Freelancers => "/freelancers".to_string(),
            Route::Stars => "/stars".to_string(),
            Route::Saved => "/saved".to_string(),
            Route::Fm => "/fm".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Advertise => "/advertise".to_string(),
            Route::SubmitListing => "/submit-listing".to_string(),
            Route::BusinessDetail { id } => format!("/business/{}", urlencoding::encode(id)),
            Route::Admin => "/admin".to_string(),
        }
    }

    /// Solo /admin exige rol
    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::Admin)
    }

    pub fn title(&self) -> Cow<'static, str> {
        match self {
            Route::Home => "Welcome to ManaDHONE".into(),
            Route::Directory => "Business Directory".into(),
            Route::Explore => "Explore Dhone".into(),
            Route::RealEstate => "Real Estate".into(),
            Route::PropertyDetail { id } => format!("Property {}", id).into(),
            Route::Auth => "Sign In".into(),
            Route::About => "About Us".into(),
            Route::Jobs => "Jobs".into(),
            Route::Freelancers => "Freelancers".into(),
            Route::Stars => "Dhone Stars".into(),
            Route::Saved => "Saved Items".into(),
            Route::Fm => "Live Radio".into(),
            Route::Contact => "Contact".into(),
            Route::Advertise => "Advertise".into(),
            Route::SubmitListing => "Submit a Listing".into(),
            Route::BusinessDetail { id } => format!("Business {}", id).into(),
            Route::Admin => "Dashboard".into(),
        }
    }
}

/// `/prefix/<segmento>` con un único segmento no vacío
fn single_param(path: &str, prefix: &str) -> Option<String> {
    let raw = path.strip_prefix(prefix)?;
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(raw.to_string()),
    }
}

/// Extrae el path del fragmento (`#/jobs?x=1` -> `/jobs`). Fragmento vacío es `/`.
pub fn path_from_hash(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    let without_query = fragment.split('?').next().unwrap_or_default();
    if without_query.is_empty() {
        return "/".to_string();
    }
    if without_query.starts_with('/') {
        without_query.to_string()
    } else {
        format!("/{}", without_query)
    }
}

/// href de un enlace interno bajo el entry point único
pub fn hash_href(path: &str) -> String {
    format!("#{}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Patrones de la tabla, en el orden en que se declaran
    const ROUTE_PATTERNS: [&str; 17] = [
        "/",
        "/directory",
        "/explore",
        "/realestate",
        "/property/:id",
        "/auth",
        "/about",
        "/jobs",
        "/freelancers",
        "/stars",
        "/saved",
        "/fm",
        "/contact",
        "/advertise",
        "/submit-listing",
        "/business/:id",
        "/admin",
    ];

    #[test]
    fn every_static_pattern_is_recognized() {
        for pattern in ROUTE_PATTERNS.iter().filter(|p| !p.contains(':')) {
            let route = Route::recognize(pattern)
                .unwrap_or_else(|| panic!("pattern {} not recognized", pattern));
            assert_eq!(route.path(), *pattern);
        }
    }

    #[test]
    fn detail_routes_capture_one_decoded_segment() {
        assert_eq!(
            Route::recognize("/business/b-42"),
            Some(Route::BusinessDetail { id: "b-42".to_string() })
        );
        assert_eq!(
            Route::recognize("/property/plot%2012"),
            Some(Route::PropertyDetail { id: "plot 12".to_string() })
        );
        assert_eq!(Route::recognize("/business/"), None);
        assert_eq!(Route::recognize("/business/a/b"), None);
    }

    #[test]
    fn trailing_slash_is_tolerated_but_prefixes_are_not() {
        assert_eq!(Route::recognize("/jobs/"), Some(Route::Jobs));
        assert_eq!(Route::recognize("/jobs-board"), None);
        assert_eq!(Route::recognize("/admin/settings"), None);
        assert_eq!(Route::recognize("/nowhere"), None);
    }

    #[test]
    fn detail_paths_are_reencoded() {
        let route = Route::PropertyDetail { id: "plot 12".to_string() };
        assert_eq!(route.path(), "/property/plot%2012");
    }

    #[test]
    fn hash_fragments_map_to_paths() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
        assert_eq!(path_from_hash("#/jobs"), "/jobs");
        assert_eq!(path_from_hash("#/jobs?ref=footer"), "/jobs");
        assert_eq!(path_from_hash("#fm"), "/fm");
    }

    #[test]
    fn only_admin_route_requires_role() {
        let gated: Vec<_> = ROUTE_PATTERNS
            .iter()
            .filter_map(|p| Route::recognize(&p.replace(":id", "x")))
            .filter(Route::requires_admin)
            .collect();
        assert_eq!(gated, vec![Route::Admin]);
    }
}
