pub const SECTION_STYLES: &str = r#"
/* Entrance animation, driven by the custom properties in Transition::style() */
@keyframes pf-enter {
  from {
    transform: translate(var(--from-x, 0), var(--from-y, 0)) scale(var(--from-scale, 1));
    opacity: var(--from-opacity, 0);
  }
  to {
    transform: none;
    opacity: 1;
  }
}

@keyframes pf-spin {
  to {
    transform: rotate(360deg);
  }
}

@keyframes pf-bob {
  0%, 100% { transform: translate(-50%, 0); opacity: 0; }
  50% { transform: translate(-50%, 10px); opacity: 1; }
}

/* Hero */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  text-align: center;
  background: linear-gradient(to top right, rgba(49, 46, 129, 0.3), var(--background), rgba(88, 28, 135, 0.3));
}

.hero-title {
  font-size: clamp(2.25rem, 6vw, 4.5rem);
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-10);
}

.typed {
  background: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  border-right: 2px solid var(--primary-400);
  padding-right: 2px;
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--text-tertiary);
  margin-bottom: var(--space-10);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  justify-content: center;
}

.scroll-cue {
  position: absolute;
  bottom: var(--space-10);
  left: 50%;
  color: var(--text-tertiary);
  font-size: 0.875rem;
  cursor: pointer;
  animation: pf-bob 2s infinite;
}

/* About */
.about-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-12);
  align-items: center;
}

.about-row > * {
  flex: 1 1 400px;
}

.feature-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  margin-bottom: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: rgba(49, 46, 129, 0.3);
  color: var(--primary-400);
}

/* Experience timeline */
.timeline {
  max-width: 56rem;
  margin: 0 auto;
}

.timeline-entry {
  position: relative;
  display: flex;
  gap: var(--space-6);
  margin-bottom: var(--space-12);
}

.timeline-entry:not(:last-child)::after {
  content: "";
  position: absolute;
  left: 32px;
  top: 64px;
  bottom: calc(-1 * var(--space-12));
  width: 2px;
  background: linear-gradient(to bottom, var(--primary-500), transparent);
}

.timeline-marker {
  flex-shrink: 0;
  width: 64px;
  height: 64px;
  border-radius: var(--radius-full);
  border: 2px solid var(--primary-500);
  background-color: rgba(49, 46, 129, 0.3);
  display: flex;
  align-items: center;
  justify-content: center;
}

.timeline-header {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.organization {
  color: var(--primary-400);
}

.subproject {
  background-color: var(--surface-raised);
  border-radius: var(--radius-lg);
  padding: var(--space-4);
  margin-top: var(--space-4);
}

/* Projects and writeups */
.media-card {
  padding: 0;
  overflow: hidden;
  cursor: pointer;
}

.media-card img {
  width: 100%;
  height: 12rem;
  object-fit: cover;
  transition: transform var(--transition-slow) var(--easing-standard);
}

.media-card:hover img {
  transform: scale(1.1);
}

.media-card .card-body {
  padding: var(--space-4) var(--space-5);
}

.card-meta {
  display: flex;
  gap: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-tertiary);
  margin-bottom: var(--space-3);
}

.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-10);
}

.filter-chip {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: none;
  font-size: 0.875rem;
  cursor: pointer;
  background-color: var(--surface-raised);
  color: var(--text-secondary);
  transition: all var(--transition-normal) var(--easing-standard);
}

.filter-chip.active {
  background-color: var(--primary-600);
  color: #FFFFFF;
}

.read-more {
  color: var(--primary-400);
  font-weight: 500;
}

/* Testimonials */
.carousel {
  position: relative;
  max-width: 56rem;
  margin: 0 auto;
}

.carousel-viewport {
  overflow: hidden;
}

.carousel-track {
  display: flex;
  transition: transform var(--transition-slow) ease-in-out;
}

.carousel-slide {
  width: 100%;
  flex-shrink: 0;
  padding: 0 var(--space-4);
  text-align: center;
}

.carousel-slide blockquote {
  font-style: italic;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.avatar {
  width: 64px;
  height: 64px;
  margin: 0 auto var(--space-4);
  border-radius: var(--radius-full);
  border: 2px solid var(--primary-500);
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 600;
}

.avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.carousel-indicators {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-top: var(--space-8);
}

.indicator {
  width: 12px;
  height: 12px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--surface-hover);
  cursor: pointer;
  transition: all var(--transition-normal) var(--easing-standard);
}

.indicator.active {
  width: 24px;
  background-color: var(--primary-500);
}

.carousel-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.carousel-arrow.prev {
  left: calc(-1 * var(--space-12));
}

.carousel-arrow.next {
  right: calc(-1 * var(--space-12));
}

/* Contact */
.contact-grid {
  display: grid;
  gap: var(--space-12);
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  max-width: 72rem;
  margin: 0 auto;
}

.contact-detail {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.form-field {
  margin-bottom: var(--space-4);
}

.form-field label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  margin-bottom: var(--space-1);
}

.form-input {
  width: 100%;
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  border: 1px solid var(--border-strong);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus {
  outline: none;
  border-color: transparent;
  box-shadow: 0 0 0 2px var(--primary-500);
}

.form-banner {
  display: flex;
  align-items: flex-start;
  gap: var(--space-3);
  padding: var(--space-4);
  margin-bottom: var(--space-6);
  border-radius: var(--radius-lg);
}

.form-banner.success {
  background-color: rgba(20, 83, 45, 0.3);
  border: 1px solid #15803D;
}

.form-banner.error {
  background-color: rgba(127, 29, 29, 0.3);
  border: 1px solid #B91C1C;
}
"#;
