use archgen::template::{lookup, FileKind, ProjectType};
use std::path::Path;

#[test]
fn test_project_type_from_name() {
    assert_eq!(ProjectType::from_name("mobile"), ProjectType::Mobile);
    assert_eq!(ProjectType::from_name("web"), ProjectType::Web);
    assert_eq!(ProjectType::from_name("api"), ProjectType::Api);
}

#[test]
fn test_unknown_type_falls_back_to_web() {
    let web = ProjectType::Web.template();
    assert_eq!(lookup("webapp"), web);
    assert_eq!(lookup("desktop"), web);
    assert_eq!(lookup(""), web);
    assert_eq!(lookup("Web"), web);
}

#[test]
fn test_file_parents_are_in_structure() {
    for project_type in ProjectType::ALL {
        let template = project_type.template();
        for path in template.files.keys() {
            let parent = Path::new(path).parent().unwrap();
            if parent.as_os_str().is_empty() {
                continue;
            }
            assert!(
                template.structure.iter().any(|dir| Path::new(dir) == parent),
                "{project_type}: parent of {path} is not in the structure list"
            );
        }
    }
}

#[test]
fn test_web_template_contents() {
    let template = ProjectType::Web.template();
    assert_eq!(
        template.structure,
        vec!["src/components", "src/pages", "src/hooks", "src/services", "src/styles", "public"]
    );

    let files: Vec<_> = template.files.iter().map(|(p, k)| (*p, *k)).collect();
    assert_eq!(
        files,
        vec![
            ("package.json", FileKind::WebPackage),
            ("src/App.js", FileKind::WebApp),
            ("src/index.js", FileKind::WebIndex),
            ("public/index.html", FileKind::WebHtml),
        ]
    );
}

#[test]
fn test_file_kind_tags() {
    assert_eq!(FileKind::MobilePackage.to_string(), "mobile_package");
    assert_eq!(FileKind::HomeScreen.to_string(), "home_screen");
    assert_eq!(FileKind::ApiServer.as_str(), "api_server");
}
