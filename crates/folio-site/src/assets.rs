//! Scripts and supplementary stylesheets shipped with every site.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Client-side behaviour for the generated site.
    ///
    /// Record-independent: every portfolio gets the same script.
    pub fn behavior_script() -> &'static str {
        BEHAVIOR_JS
    }

    /// Optional breakpoint, print and reduced-motion rules.
    pub fn responsive_css() -> &'static str {
        RESPONSIVE_CSS
    }

    /// Optional helper functions for people extending the site.
    pub fn utility_script() -> &'static str {
        UTILS_JS
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const BEHAVIOR_JS: &str = r##"// Portfolio runtime
document.addEventListener('DOMContentLoaded', function () {
  'use strict';

  if (window.AOS) {
    AOS.init({ duration: 1000, easing: 'ease-in-out', once: true });
  }

  const navbar = document.querySelector('.navbar');
  const backToTop = document.getElementById('backToTop');

  // Navbar shadow and back-to-top visibility
  window.addEventListener('scroll', function () {
    const scrolled = window.scrollY > 50;
    if (navbar) navbar.classList.toggle('scrolled', scrolled);
    if (backToTop) backToTop.classList.toggle('visible', scrolled);
  });

  // Smooth scroll for in-page links, offset by the fixed navbar
  document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
    anchor.addEventListener('click', function (e) {
      const href = this.getAttribute('href');
      const target = href.length > 1 ? document.querySelector(href) : null;
      if (!target) return;

      e.preventDefault();
      const offset = navbar ? navbar.offsetHeight : 0;
      const top = target.getBoundingClientRect().top + window.pageYOffset - offset;
      window.scrollTo({ top: top, behavior: 'smooth' });
      history.pushState(null, '', href);
    });
  });

  if (backToTop) {
    backToTop.addEventListener('click', function () {
      window.scrollTo({ top: 0, behavior: 'smooth' });
    });
  }

  // Scroll spy
  const sections = document.querySelectorAll('section[id]');
  const navLinks = document.querySelectorAll('.nav-link');

  function highlightNavigation() {
    const position = window.scrollY + 100;
    sections.forEach(function (section) {
      const top = section.offsetTop;
      if (position >= top && position < top + section.offsetHeight) {
        const id = '#' + section.getAttribute('id');
        navLinks.forEach(function (link) {
          link.classList.toggle('active', link.getAttribute('href') === id);
        });
      }
    });
  }

  window.addEventListener('scroll', highlightNavigation);
  highlightNavigation();

  // Contact form: no network call, confirm locally
  const contactForm = document.getElementById('contactForm');
  if (contactForm) {
    contactForm.addEventListener('submit', function (e) {
      e.preventDefault();
      const data = new FormData(this);
      const complete = ['name', 'email', 'subject', 'message'].every(function (field) {
        return String(data.get(field) || '').trim() !== '';
      });

      if (!complete) {
        showNotification('Please fill in all fields.', 'error');
        return;
      }

      showNotification('Message sent successfully! I will get back to you soon.', 'success');
      this.reset();
    });
  }

  function showNotification(message, type) {
    const note = document.createElement('div');
    note.className = 'notification notification-' + type;
    note.setAttribute('role', 'status');
    note.textContent = message;
    note.style.cssText =
      'position:fixed;top:20px;right:20px;z-index:10000;padding:16px 20px;' +
      'background:#fff;border-radius:8px;box-shadow:0 4px 12px rgba(0,0,0,.15);' +
      'border-left:4px solid ' + (type === 'success' ? '#28a745' : '#dc3545') + ';';
    document.body.appendChild(note);
    setTimeout(function () { note.remove(); }, 5000);
  }
});
"##;

const RESPONSIVE_CSS: &str = r#"/* Responsive Enhancements */
@media (max-width: 575.98px) {
  .hero-title {
    font-size: 1.8rem;
  }

  .hero-subtitle {
    font-size: 1.1rem;
  }

  .hero-buttons .btn {
    display: block;
    width: 100%;
    margin: 0 0 10px 0 !important;
  }

  .skill-item {
    font-size: 0.85rem;
    padding: 8px 16px;
  }
}

@media (min-width: 576px) and (max-width: 767.98px) {
  .hero-title {
    font-size: 2.2rem;
  }
}

@media (min-width: 768px) and (max-width: 991.98px) {
  .hero-title {
    font-size: 2.8rem;
  }

  .section-padding {
    padding: 70px 0;
  }
}

@media print {
  .navbar,
  .back-to-top,
  .scroll-indicator {
    display: none;
  }

  .hero-section {
    background: #ffffff;
    color: #000000;
  }
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}
"#;

const UTILS_JS: &str = r#"// Utility functions

function validateEmail(email) {
  return /^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(String(email).toLowerCase());
}

function debounce(fn, wait) {
  let timeout;
  return function () {
    const args = arguments;
    clearTimeout(timeout);
    timeout = setTimeout(function () { fn.apply(null, args); }, wait);
  };
}

function throttle(fn, limit) {
  let waiting = false;
  return function () {
    if (waiting) return;
    fn.apply(this, arguments);
    waiting = true;
    setTimeout(function () { waiting = false; }, limit);
  };
}

function scrollToElement(selector, offset) {
  const element = document.querySelector(selector);
  if (!element) return;
  const top = element.getBoundingClientRect().top + window.pageYOffset - (offset || 70);
  window.scrollTo({ top: top, behavior: 'smooth' });
}

function copyToClipboard(text) {
  return navigator.clipboard
    ? navigator.clipboard.writeText(text)
    : Promise.reject(new Error('Clipboard unavailable'));
}

function formatDate(date) {
  const d = new Date(date);
  const pad = function (n) { return String(n).padStart(2, '0'); };
  return d.getFullYear() + '-' + pad(d.getMonth() + 1) + '-' + pad(d.getDate());
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behavior_script_is_static() {
        assert_eq!(
            AssetPipeline::behavior_script(),
            AssetPipeline::behavior_script()
        );
    }

    #[test]
    fn contact_handler_stays_local() {
        let js = AssetPipeline::behavior_script();

        assert!(js.contains("contactForm"));
        assert!(js.contains("smooth"));
        assert!(!js.contains("fetch("));
        assert!(!js.contains("XMLHttpRequest"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.skill-item {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".skill-item"));
    }

    #[test]
    fn minifies_every_theme() {
        for theme in crate::themes::Theme::ALL {
            let css = crate::themes::stylesheet(theme.id());
            assert!(AssetPipeline::minify_css(&css).is_ok(), "theme {}", theme);
        }
    }
}
