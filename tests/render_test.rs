//! Integration tests for classification and rendering.

use harvardcv::render::{self, escape_html, to_fragment, to_word_document};
use harvardcv::{
    BlockKind, Classifier, Field, LineRole, Locale, RenderOptions, ResumeRecord, SectionKind,
};

fn full_record() -> ResumeRecord {
    ResumeRecord::with_identity("Ana Pérez", "ana@example.com")
        .with(Field::Phone, "+34 600 000 000")
        .with(Field::Location, "Madrid, España")
        .with(Field::Linkedin, "linkedin.com/in/ana")
        .with(Field::Portfolio, "https://ana.dev")
        .with(Field::Summary, "Backend engineer focused on reliability.")
        .with(
            Field::Education,
            "MSc Computer Science\nUniversidad Politécnica de Madrid\n2018 - 2020",
        )
        .with(
            Field::Experience,
            "Senior Engineer\nAcme Corp, Madrid - 2020 - Present\n• Led a team of 5, 2021",
        )
        .with(Field::Skills, "Languages: Spanish, English\nTeamwork")
}

#[test]
fn test_render_is_idempotent() {
    let record = full_record();
    let options = RenderOptions::default();

    let first = render::render(&record, &options);
    let second = render::render(&record, &options);

    assert_eq!(to_fragment(&first, &options), to_fragment(&second, &options));
    assert_eq!(
        to_word_document(&first, &options),
        to_word_document(&second, &options)
    );
}

#[test]
fn test_every_field_is_escaped() {
    let payload = "<script>alert('x')</script> & co";
    let mut record = ResumeRecord::new();
    for field in Field::ALL {
        record.set(field, payload);
    }

    let options = RenderOptions::new().with_footer(true);
    let doc = render::render(&record, &options);
    let fragment = to_fragment(&doc, &options);
    let document = to_word_document(&doc, &options);

    for output in [&fragment, &document] {
        assert!(!output.contains("<script>"));
        assert!(!output.contains("</script>"));
        assert!(!output.contains(" & co"));
        assert!(output.contains(&escape_html(payload)));
    }
}

#[test]
fn test_empty_sections_are_omitted() {
    let record = ResumeRecord::with_identity("Ana", "ana@example.com");
    let options = RenderOptions::default();
    let html = to_fragment(&render::render(&record, &options), &options);

    for kind in [
        SectionKind::Summary,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Skills,
    ] {
        assert!(!html.contains(kind.default_title(Locale::En)));
    }
    assert!(!html.contains("<h2"));
}

#[test]
fn test_full_record_sections() {
    let options = RenderOptions::default();
    let doc = render::render(&full_record(), &options);
    let html = to_fragment(&doc, &options);

    assert!(html.contains(">Professional Summary</h2>"));
    assert!(html.contains(">Education</h2>"));
    assert!(html.contains(">Professional Experience</h2>"));
    assert!(html.contains(">Skills and Competencies</h2>"));
    assert!(html.contains("Madrid, España • +34 600 000 000"));
    assert!(html.contains("href=\"https://linkedin.com/in/ana\""));
    assert!(html.contains("href=\"https://ana.dev\""));
    assert!(html.contains(">LinkedIn</a> • <a "));
    assert!(html.contains("• Led a team of 5, 2021</p>"));
    assert!(html.contains("<strong>Languages:</strong> Spanish, English"));
    assert!(!html.contains("Curriculum Vitae"));
}

#[test]
fn test_section_order_follows_blocks() {
    let options = RenderOptions::default();
    let html = to_fragment(&render::render(&full_record(), &options), &options);

    let summary = html.find("Professional Summary").unwrap();
    let education = html.find(">Education<").unwrap();
    let experience = html.find("Professional Experience").unwrap();
    let skills = html.find("Skills and Competencies").unwrap();
    assert!(summary < education && education < experience && experience < skills);
}

#[test]
fn test_classifier_precedence() {
    let classifier = Classifier::default();
    assert_eq!(
        classifier.classify(BlockKind::Education, "Universidad Nacional, 2020"),
        LineRole::Institution
    );
    assert_eq!(
        classifier.classify(BlockKind::Experience, "• Led a team of 5, 2021"),
        LineRole::BulletItem
    );

    let line = classifier.classify_line(BlockKind::Skills, "Languages: Spanish, English");
    assert_eq!(line.category.as_deref(), Some("Languages"));
    assert_eq!(line.text, "Spanish, English");
}

#[test]
fn test_custom_titles_and_locale() {
    let options = RenderOptions::new()
        .with_locale(Locale::Es)
        .with_section_title(SectionKind::Experience, "Trayectoria");
    let html = to_fragment(&render::render(&full_record(), &options), &options);

    assert!(html.contains(">Resumen Profesional</h2>"));
    assert!(html.contains(">Educación</h2>"));
    assert!(html.contains(">Trayectoria</h2>"));
    assert!(html.contains(">Habilidades y Competencias</h2>"));
}

#[test]
fn test_example_record_roles() {
    let options = RenderOptions::default();
    let doc = render::render(&ResumeRecord::example(), &options);

    let education = doc.section(SectionKind::Education).unwrap();
    let roles: Vec<_> = education.lines().iter().map(|l| l.role).collect();
    assert_eq!(
        &roles[..3],
        &[LineRole::Heading, LineRole::Institution, LineRole::DateRange]
    );

    let experience = doc.section(SectionKind::Experience).unwrap();
    assert_eq!(experience.lines()[1].role, LineRole::DateRange);
    assert!(experience
        .lines()
        .iter()
        .any(|l| l.role == LineRole::BulletItem));
}
