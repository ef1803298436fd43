//! Template engine for rendering the portfolio page and its README.

use minijinja::Environment;
use serde::Serialize;

use crate::docs::{ReadmeContext, README_TEMPLATE};

/// A social profile link.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    /// Profile URL
    pub url: String,
    /// Accessible label
    pub label: &'static str,
    /// Font Awesome brand icon
    pub icon: &'static str,
}

/// A skill badge.
#[derive(Debug, Clone, Serialize)]
pub struct SkillView {
    pub name: String,
    pub level: String,
}

/// A project card.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub technologies: String,
    pub description: String,
    pub live_url: String,
    pub source_url: String,
    /// Image `src`; `None` renders the placeholder block
    pub image_src: Option<String>,
}

/// Context for rendering the page template.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub name: String,
    pub title: String,
    /// First 160 characters of the about text
    pub description: String,
    pub keywords: String,
    pub about: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub photo_src: Option<String>,
    pub social: Vec<SocialLink>,
    pub skills: Vec<SkillView>,
    pub projects: Vec<ProjectView>,
    pub include_contact: bool,
    pub include_resume: bool,
    /// Copyright year
    pub year: i32,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("base.html", BASE_TEMPLATE)
            .expect("Failed to add base template");
        env.add_template("index.html", INDEX_TEMPLATE)
            .expect("Failed to add index template");
        env.add_template("social.html", SOCIAL_TEMPLATE)
            .expect("Failed to add social template");
        env.add_template("contact.html", CONTACT_TEMPLATE)
            .expect("Failed to add contact template");
        env.add_template("README.md", README_TEMPLATE)
            .expect("Failed to add readme template");

        Self { env }
    }

    /// Render the portfolio page.
    pub fn render_page(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        self.env.get_template("index.html")?.render(context)
    }

    /// Render `README.md`. Not HTML-escaped.
    pub fn render_readme(&self, context: &ReadmeContext) -> Result<String, minijinja::Error> {
        self.env.get_template("README.md")?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ name }} - {{ title }}</title>
  <meta name="description" content="{{ description }}">
  <meta name="keywords" content="{{ keywords }}">
  <meta property="og:title" content="{{ name }} - {{ title }}">
  <meta property="og:description" content="{{ description }}">
  <meta property="og:type" content="website">

  <link href="https://cdnjs.cloudflare.com/ajax/libs/bootstrap/5.3.0/css/bootstrap.min.css" rel="stylesheet">
  <link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css" rel="stylesheet">
  <link href="https://cdnjs.cloudflare.com/ajax/libs/aos/2.3.4/aos.css" rel="stylesheet">
  <link rel="stylesheet" href="assets/css/style.css">
</head>
<body data-bs-spy="scroll" data-bs-target="#navbar" data-bs-offset="70">
  <nav id="navbar" class="navbar navbar-expand-lg navbar-dark fixed-top">
    <div class="container">
      <a class="navbar-brand fw-bold" href="#home">{{ name }}</a>
      <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarNav">
        <span class="navbar-toggler-icon"></span>
      </button>
      <div class="collapse navbar-collapse" id="navbarNav">
        <ul class="navbar-nav ms-auto">
          <li class="nav-item"><a class="nav-link" href="#home">Home</a></li>
          <li class="nav-item"><a class="nav-link" href="#about">About</a></li>
          <li class="nav-item"><a class="nav-link" href="#skills">Skills</a></li>
          <li class="nav-item"><a class="nav-link" href="#projects">Projects</a></li>
          {% if include_contact %}<li class="nav-item"><a class="nav-link" href="#contact">Contact</a></li>{% endif %}
        </ul>
      </div>
    </div>
  </nav>

{% block content %}{% endblock %}

  <footer class="footer bg-dark text-white py-4">
    <div class="container">
      <div class="row align-items-center">
        <div class="col-md-6">
          <p class="mb-0">&copy; {{ year }} {{ name }}. All rights reserved.</p>
        </div>
        <div class="col-md-6">
          {% with social_class = "footer-social text-end" %}{% include "social.html" %}{% endwith %}
        </div>
      </div>
    </div>
  </footer>

  <button id="backToTop" class="back-to-top" aria-label="Back to top">
    <i class="fas fa-chevron-up"></i>
  </button>

  <script src="https://cdnjs.cloudflare.com/ajax/libs/bootstrap/5.3.0/js/bootstrap.bundle.min.js"></script>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/aos/2.3.4/aos.js"></script>
  <script src="assets/js/script.js"></script>
</body>
</html>
"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
  <section id="home" class="hero-section d-flex align-items-center min-vh-100">
    <div class="container">
      <div class="row align-items-center">
        <div class="col-lg-6" data-aos="fade-right">
          <div class="hero-content">
            <h1 class="hero-title">Hello, I'm <span class="text-primary">{{ name }}</span></h1>
            <h2 class="hero-subtitle">{{ title }}</h2>
            <div class="hero-buttons mt-4">
              <a href="#projects" class="btn btn-primary btn-lg me-3"><i class="fas fa-eye me-2"></i>View My Work</a>
              {% if include_contact %}
              <a href="#contact" class="btn btn-outline-light btn-lg"><i class="fas fa-envelope me-2"></i>Get In Touch</a>
              {% elif email %}
              <a href="mailto:{{ email }}" class="btn btn-outline-light btn-lg"><i class="fas fa-envelope me-2"></i>Email Me</a>
              {% endif %}
            </div>
            {% with social_class = "social-links mt-4" %}{% include "social.html" %}{% endwith %}
          </div>
        </div>
        <div class="col-lg-6" data-aos="fade-left" data-aos-delay="200">
          {% if photo_src %}
          <div class="hero-image text-center">
            <img src="{{ photo_src }}" alt="{{ name }}" class="img-fluid hero-photo">
          </div>
          {% else %}
          <div class="hero-placeholder"><i class="fas fa-user-circle"></i></div>
          {% endif %}
        </div>
      </div>
    </div>
    <div class="scroll-indicator">
      <a href="#about" class="scroll-link"><i class="fas fa-chevron-down"></i></a>
    </div>
  </section>

  <section id="about" class="section-padding">
    <div class="container">
      <div class="text-center mb-5" data-aos="fade-up">
        <h2 class="section-title">About Me</h2>
        <div class="section-divider"></div>
      </div>
      <div class="col-lg-8 mx-auto about-content" data-aos="fade-up" data-aos-delay="200">
        <p class="about-text">{{ about }}</p>
        <div class="row mt-4 justify-content-center">
          {% if email %}
          <div class="col-md-6 mb-3"><div class="info-item"><i class="fas fa-envelope text-primary"></i><div><strong>Email:</strong> <a href="mailto:{{ email }}">{{ email }}</a></div></div></div>
          {% endif %}
          {% if phone %}
          <div class="col-md-6 mb-3"><div class="info-item"><i class="fas fa-phone text-primary"></i><div><strong>Phone:</strong> <a href="tel:{{ phone }}">{{ phone }}</a></div></div></div>
          {% endif %}
          {% if location %}
          <div class="col-md-6 mb-3"><div class="info-item"><i class="fas fa-map-marker-alt text-primary"></i><div><strong>Location:</strong> {{ location }}</div></div></div>
          {% endif %}
          {% if website %}
          <div class="col-md-6 mb-3"><div class="info-item"><i class="fas fa-globe text-primary"></i><div><strong>Website:</strong> <a href="{{ website }}" target="_blank">{{ website }}</a></div></div></div>
          {% endif %}
        </div>
        {% if include_resume %}
        <div class="text-center mt-4 resume-link">
          <a href="#" class="btn btn-outline-primary"><i class="fas fa-download me-2"></i>Download Resume</a>
        </div>
        {% endif %}
      </div>
    </div>
  </section>

  <section id="skills" class="section-padding bg-light">
    <div class="container">
      <div class="text-center mb-5" data-aos="fade-up">
        <h2 class="section-title">Skills &amp; Technologies</h2>
        <div class="section-divider"></div>
        <p class="section-subtitle">Technologies I work with</p>
      </div>
      <div class="col-lg-10 mx-auto" data-aos="fade-up" data-aos-delay="200">
        <div class="skills-container">
          {% for skill in skills %}
          <div class="skill-item" data-aos="zoom-in" data-aos-delay="{{ loop.index * 100 }}">
            <span class="skill-name">{{ skill.name }}</span>
            <span class="skill-level">{{ skill.level }}</span>
          </div>
          {% endfor %}
        </div>
      </div>
    </div>
  </section>

  <section id="projects" class="section-padding">
    <div class="container">
      <div class="text-center mb-5" data-aos="fade-up">
        <h2 class="section-title">Featured Projects</h2>
        <div class="section-divider"></div>
        <p class="section-subtitle">Here are some of my recent works</p>
      </div>
      <div class="row">
        {% for project in projects %}
        <div class="col-lg-4 col-md-6 mb-4" data-aos="fade-up" data-aos-delay="{{ loop.index * 100 }}">
          <div class="project-card h-100" data-project="{{ loop.index }}">
            {% if project.image_src %}
            <div class="project-image">
              <img src="{{ project.image_src }}" alt="{{ project.name }}" class="img-fluid">
              <div class="project-overlay">
                <div class="project-links">
                  {% if project.live_url %}<a href="{{ project.live_url }}" target="_blank" class="btn btn-light btn-sm me-2"><i class="fas fa-external-link-alt"></i></a>{% endif %}
                  {% if project.source_url %}<a href="{{ project.source_url }}" target="_blank" class="btn btn-light btn-sm"><i class="fab fa-github"></i></a>{% endif %}
                </div>
              </div>
            </div>
            {% else %}
            <div class="project-placeholder"><i class="fas fa-code"></i></div>
            {% endif %}
            <div class="project-content">
              <h5 class="project-title">{{ project.name }}</h5>
              {% if project.technologies %}<p class="project-tech">{{ project.technologies }}</p>{% endif %}
              <p class="project-description">{{ project.description }}</p>
              <div class="project-actions">
                {% if project.live_url %}<a href="{{ project.live_url }}" target="_blank" class="btn btn-primary btn-sm me-2"><i class="fas fa-eye me-1"></i>Live Demo</a>{% endif %}
                {% if project.source_url %}<a href="{{ project.source_url }}" target="_blank" class="btn btn-outline-primary btn-sm"><i class="fab fa-github me-1"></i>Code</a>{% endif %}
              </div>
            </div>
          </div>
        </div>
        {% endfor %}
      </div>
    </div>
  </section>
{% if include_contact %}
{% include "contact.html" %}
{% endif %}
{% endblock %}
"##;

const SOCIAL_TEMPLATE: &str = r##"{% if social %}<div class="{{ social_class }}">{% for link in social %}<a href="{{ link.url }}" target="_blank" aria-label="{{ link.label }}"><i class="fab {{ link.icon }}"></i></a>{% endfor %}</div>{% endif %}"##;

const CONTACT_TEMPLATE: &str = r##"  <section id="contact" class="section-padding bg-dark text-white">
    <div class="container">
      <div class="text-center mb-5" data-aos="fade-up">
        <h2 class="section-title text-white">Get In Touch</h2>
        <div class="section-divider"></div>
        <p class="section-subtitle">Feel free to reach out for collaborations or just a friendly hello!</p>
      </div>
      <div class="col-lg-8 mx-auto" data-aos="fade-up" data-aos-delay="200">
        <form class="contact-form" id="contactForm">
          <div class="row">
            <div class="col-md-6 mb-3">
              <label for="contactName" class="form-label">Your Name</label>
              <input type="text" class="form-control" id="contactName" name="name" required>
            </div>
            <div class="col-md-6 mb-3">
              <label for="contactEmail" class="form-label">Your Email</label>
              <input type="email" class="form-control" id="contactEmail" name="email" required>
            </div>
          </div>
          <div class="mb-3">
            <label for="contactSubject" class="form-label">Subject</label>
            <input type="text" class="form-control" id="contactSubject" name="subject" required>
          </div>
          <div class="mb-3">
            <label for="contactMessage" class="form-label">Message</label>
            <textarea class="form-control" id="contactMessage" name="message" rows="5" required></textarea>
          </div>
          <div class="text-center">
            <button type="submit" class="btn btn-primary btn-lg"><i class="fas fa-paper-plane me-2"></i>Send Message</button>
          </div>
        </form>
      </div>
    </div>
  </section>
"##;
