pub const HOME_STYLES: &str = r#"
/* Promo Page Styles */

/* General Layout */
.home-container {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

section {
  padding: var(--space-12) 0;
}

.section-lede {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

/* Hero Section */
.hero {
  background: linear-gradient(135deg, var(--primary-dark), var(--accent));
  color: white;
  padding: var(--space-16) 0;
  text-align: center;
}

.hero-content {
  max-width: 800px;
  margin: 0 auto;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  letter-spacing: -0.02em;
}

.hero-subtitle {
  font-size: 1.5rem;
  margin-bottom: var(--space-8);
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  margin-top: var(--space-8);
}

/* Gallery Section */
.gallery-section {
  background-color: var(--surface);
}

.vinyl-nav {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-bottom: var(--space-6);
}

.vinyl-btn {
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background-color: var(--surface);
  color: var(--text-secondary);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard),
              border-color var(--transition-fast) var(--easing-standard);
}

.vinyl-btn:hover {
  border-color: var(--primary);
  color: var(--text-primary);
}

.vinyl-btn.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: white;
}

.vinyl-display {
  display: flex;
  justify-content: center;
}

.vinyl-item {
  display: flex;
  align-items: center;
  gap: var(--space-6);
  padding: var(--space-6);
  max-width: 640px;
  width: 100%;
}

/* The sleeve art is a spinning-record disc with the label in the middle */
.vinyl-art {
  flex-shrink: 0;
  width: 140px;
  height: 140px;
  border-radius: var(--radius-full);
  background: radial-gradient(circle at center, var(--primary) 18%, var(--neutral-900) 19%);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  box-shadow: var(--shadow-md);
}

.vinyl-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-1);
}

.vinyl-artist {
  color: var(--text-secondary);
  margin-bottom: var(--space-3);
}

.vinyl-price {
  color: var(--primary);
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: var(--space-3);
}

.vinyl-blurb {
  color: var(--text-secondary);
  line-height: 1.6;
}

/* Game Section */
.game-section {
  background-color: var(--background);
}

.game-card {
  max-width: 560px;
  margin: 0 auto;
  padding: var(--space-6);
}

.guess-row {
  display: flex;
  gap: var(--space-3);
}

.guess-input {
  flex: 1;
}

.game-result {
  margin-top: var(--space-4);
  padding: var(--space-3);
  border-radius: var(--radius-md);
  font-weight: 500;
}

.game-result.success {
  background-color: rgba(16, 185, 129, 0.12);
  color: var(--success);
}

.game-result.error {
  background-color: rgba(239, 68, 68, 0.12);
  color: var(--error);
}

/* Contact Section */
.contact-section {
  background-color: var(--surface);
}

.contact-card {
  max-width: 720px;
  margin: 0 auto;
  padding: var(--space-6);
}

.form-success {
  margin-top: var(--space-6);
  padding: var(--space-6);
  background-color: rgba(16, 185, 129, 0.08);
  border-left: 4px solid var(--success);
  border-radius: var(--radius-lg);
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

.form-success h3 {
  margin-bottom: var(--space-3);
  color: var(--success);
}

.form-success p {
  margin-bottom: var(--space-2);
  color: var(--text-primary);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* Footer */
.home-footer {
  background-color: var(--neutral-800);
  color: var(--neutral-300);
  padding: var(--space-8) 0;
  text-align: center;
  margin-top: auto;
}

/* Responsive Adjustments */
@media (max-width: 768px) {
  .hero-title {
    font-size: 2.5rem;
  }

  .hero-subtitle {
    font-size: 1.25rem;
  }

  .hero-actions {
    flex-direction: column;
    gap: var(--space-3);
    padding: 0 var(--space-4);
  }

  .vinyl-item {
    flex-direction: column;
    text-align: center;
  }

  section {
    padding: var(--space-8) 0;
  }
}

@media (max-width: 480px) {
  .hero-title {
    font-size: 2rem;
  }

  .guess-row {
    flex-direction: column;
  }
}
"#;
