pub const BASE_COMPONENTS: &str = r#"
/* Layout */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.section {
  padding: var(--space-20) 0;
}

/* Section heading */
.section-heading {
  margin-bottom: var(--space-12);
}

.section-heading.centered {
  text-align: center;
}

.section-heading h2 {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  background: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.section-heading p {
  color: var(--text-tertiary);
  max-width: 42rem;
  margin: 0 auto;
}

/* Buttons */
.btn {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  font-weight: 500;
  border-radius: var(--radius-lg);
  cursor: pointer;
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard),
    box-shadow var(--transition-normal) var(--easing-standard);
}

.btn:hover {
  transform: scale(1.05);
  text-decoration: none;
}

.btn:active {
  transform: scale(0.95);
}

.btn-primary {
  background: var(--gradient-button);
  color: #FFFFFF;
  padding: 10px var(--space-6);
  border: none;
}

.btn-primary:hover {
  box-shadow: var(--shadow-glow);
}

.btn-secondary {
  background-color: var(--surface-raised);
  color: var(--text-secondary);
  border: 1px solid var(--border-strong);
  padding: var(--space-2) var(--space-5);
}

.btn:disabled {
  cursor: progress;
  opacity: 0.8;
}

.btn-block {
  width: 100%;
}

.icon-btn {
  background-color: var(--surface-raised);
  color: var(--text-tertiary);
  border: none;
  border-radius: var(--radius-lg);
  padding: var(--space-2);
  cursor: pointer;
  transition: color var(--transition-fast) var(--easing-standard);
}

.icon-btn:hover {
  color: var(--text-primary);
}

.spinner {
  width: 20px;
  height: 20px;
  border: 2px solid #FFFFFF;
  border-top-color: transparent;
  border-radius: var(--radius-full);
  animation: pf-spin 1s linear infinite;
}

/* Cards */
.card {
  background-color: var(--surface);
  backdrop-filter: blur(4px);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
  transition: border-color var(--transition-normal) var(--easing-standard),
    transform var(--transition-normal) var(--easing-standard);
}

.card:hover {
  border-color: rgba(99, 102, 241, 0.5);
  transform: translateY(-5px);
}

.tag {
  display: inline-flex;
  align-items: center;
  font-size: 0.75rem;
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-secondary);
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
}

/* Navigation */
.navbar {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  padding: var(--space-5) 0;
  background-color: transparent;
  transition: all var(--transition-normal) var(--easing-standard);
}

.navbar.scrolled {
  padding: var(--space-3) 0;
  background-color: var(--nav-scrolled);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-lg);
}

.nav-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
  background: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links {
  display: flex;
  gap: var(--space-2);
  list-style: none;
}

.nav-link {
  display: block;
  padding: var(--space-2) var(--space-4);
  color: var(--text-tertiary);
  transition: color var(--transition-normal) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  text-decoration: none;
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.menu-button {
  display: none;
}

.mobile-menu {
  display: none;
  padding: var(--space-4) var(--space-6);
  background-color: var(--nav-scrolled);
  backdrop-filter: blur(16px);
}

.mobile-menu ul {
  list-style: none;
}

@media (max-width: 768px) {
  .nav-links,
  .nav-actions .btn {
    display: none;
  }

  .menu-button {
    display: inline-flex;
  }

  .mobile-menu.open {
    display: block;
  }
}

/* Modal */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background-color: rgba(0, 0, 0, 0.7);
  backdrop-filter: blur(4px);
}

.modal-panel {
  position: relative;
  max-width: 48rem;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  background-color: var(--surface-solid);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.modal-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  z-index: 10;
}

.modal-image {
  width: 100%;
  height: 20rem;
  object-fit: cover;
}

.modal-body {
  padding: var(--space-6);
}

/* Footer */
.site-footer {
  border-top: 1px solid var(--border);
  margin-top: var(--space-20);
  padding: var(--space-12) 0;
}

.footer-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
}

.footer-grid ul {
  list-style: none;
}

.footer-bottom {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: var(--space-12);
  padding-top: var(--space-8);
  border-top: 1px solid var(--border);
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.social-links {
  display: flex;
  gap: var(--space-4);
}

.social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-width: 44px;
  height: 44px;
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.social-link:hover {
  background-color: var(--primary-600);
  text-decoration: none;
}
"#;
