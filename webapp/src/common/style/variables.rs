// the two palettes share every token name; the root element carries exactly one of the
// theme classes, see ThemeMode::css_class()
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary-300: #A5B4FC;
  --primary-400: #818CF8;
  --primary-500: #6366F1;
  --primary-600: #4F46E5;
  --primary-900: #312E81;
  --secondary-400: #C084FC;
  --secondary-500: #A855F7;
  --secondary-600: #9333EA;
  --gradient-brand: linear-gradient(to right, var(--primary-400), var(--secondary-400));
  --gradient-button: linear-gradient(to right, var(--primary-600), var(--secondary-600));

  /* Semantic Colors */
  --success: #22C55E;
  --error: #EF4444;

  /* Layout */
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.3), 0 4px 6px -2px rgba(0, 0, 0, 0.2);
  --shadow-glow: 0 0 15px rgba(99, 102, 241, 0.5);

  /* Animation */
  --transition-fast: 200ms;
  --transition-normal: 300ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

.theme-dark {
  --background: #0B0F19;
  --surface: rgba(17, 24, 39, 0.5);
  --surface-solid: #111827;
  --surface-raised: #1F2937;
  --surface-hover: #374151;
  --nav-scrolled: rgba(17, 24, 39, 0.9);
  --border: #1F2937;
  --border-strong: #374151;
  --text-primary: #FFFFFF;
  --text-secondary: #D1D5DB;
  --text-tertiary: #9CA3AF;
}

.theme-light {
  --background: #FFFFFF;
  --surface: rgba(243, 244, 246, 0.7);
  --surface-solid: #F9FAFB;
  --surface-raised: #E5E7EB;
  --surface-hover: #D1D5DB;
  --nav-scrolled: rgba(255, 255, 255, 0.9);
  --border: #E5E7EB;
  --border-strong: #D1D5DB;
  --text-primary: #111827;
  --text-secondary: #374151;
  --text-tertiary: #6B7280;
}
"#;
