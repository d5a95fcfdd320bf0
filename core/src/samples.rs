use crate::locale::Locale;

pub(crate) const BODIES: &[(&str, Locale, &str)] = &[
    ("password-security", Locale::En, PASSWORD_SECURITY_EN),
    ("password-security", Locale::Nl, PASSWORD_SECURITY_NL),
    ("two-factor-auth", Locale::En, TWO_FACTOR_AUTH_EN),
    ("two-factor-auth", Locale::Nl, TWO_FACTOR_AUTH_NL),
];

const PASSWORD_SECURITY_EN: &str = "
## Why Password Security Matters

Your passwords are the keys to your digital life. From email accounts to banking, social media to cloud storage, strong passwords are your first line of defense against unauthorized access.

## Creating Strong Passwords

A strong password should be:

- At least 12 characters long
- A mix of uppercase and lowercase letters
- Include numbers and special characters
- Unique for each account
- Not based on personal information

### The Problem with Reused Passwords

When you use the same password across multiple sites, a single data breach can compromise all your accounts. This is known as credential stuffing, and it's one of the most common attack vectors.

## Password Managers

Consider using a password manager to:

- Generate strong, unique passwords
- Store passwords securely
- Auto-fill credentials safely
- Sync across devices

Popular options include Bitwarden, 1Password, and Dashlane.

## Two-Factor Authentication

Always enable two-factor authentication (2FA) when available. This adds an extra layer of security beyond your password.

## Quick Tips

1. Never share your passwords
2. Change passwords regularly for sensitive accounts
3. Use passphrases for easier memorization
4. Enable biometric authentication when possible
";

const PASSWORD_SECURITY_NL: &str = "
## Waarom Wachtwoordbeveiliging Belangrijk Is

Je wachtwoorden zijn de sleutels tot je digitale leven. Van e-mailaccounts tot bankzaken, van sociale media tot cloudopslag, sterke wachtwoorden zijn je eerste verdedigingslinie tegen ongeautoriseerde toegang.

## Sterke Wachtwoords Maken

Een sterk wachtwoord moet:

- Minstens 12 tekens lang zijn
- Een mix van hoofdletters en kleine letters bevatten
- Cijfers en speciale tekens bevatten
- Uniek zijn voor elk account
- Niet gebaseerd zijn op persoonlijke informatie

### Het Probleem met Hergebruikte Wachtwoorden

Wanneer je hetzelfde wachtwoord op meerdere sites gebruikt, kan een enkele datalek al je accounts compromitteren.

## Wachtwoordmanagers

Overweeg het gebruik van een wachtwoordmanager om:

- Sterke, unieke wachtwoorden te genereren
- Wachtwoorden veilig op te slaan
- Inloggegevens veilig automatisch in te vullen
- Te synchroniseren over apparaten

## Twee-Factor Authenticatie

Schakel altijd twee-factor authenticatie (2FA) in wanneer beschikbaar. Dit voegt een extra beveiligingslaag toe.
";

const TWO_FACTOR_AUTH_EN: &str = "
## What is Two-Factor Authentication?

Two-factor authentication (2FA) adds an extra layer of security to your accounts. Instead of just entering a password, you also need to prove you have access to something else.

## Types of 2FA

### SMS Codes
Codes sent via text message. Convenient but less secure (SIM swapping attacks).

### Authenticator Apps
Apps like Google Authenticator or Authy generate time-based codes. More secure than SMS.

### Hardware Keys
Physical devices like YubiKey. Highest security level.

### Biometric
Fingerprint or facial recognition. Convenient and secure.

## Setting Up 2FA

1. Go to your account security settings
2. Look for \"Two-Factor Authentication\" or \"2FA\"
3. Choose your preferred method
4. Follow the setup instructions
5. Save your backup codes in a safe place

## Why 2FA Matters

Even if someone steals your password, they can't access your account without the second factor. This simple step can prevent the majority of account takeovers.
";

const TWO_FACTOR_AUTH_NL: &str = "
## Wat is Twee-Factor Authenticatie?

Twee-factor authenticatie (2FA) voegt een extra beveiligingslaag toe aan je accounts. In plaats van alleen een wachtwoord in te voeren, moet je ook bewijzen dat je toegang hebt tot iets anders.

## Soorten 2FA

### SMS-codes
Codes verzonden via tekstbericht. Gemakkelijk maar minder veilig.

### Authenticator-apps
Apps zoals Google Authenticator genereren tijdgebonden codes. Veiliger dan SMS.

### Hardware-sleutels
Fysieke apparaten zoals YubiKey. Hoogste beveiligingsniveau.

## 2FA Instellen

1. Ga naar je accountbeveiligingsinstellingen
2. Zoek naar \"Twee-Factor Authenticatie\" of \"2FA\"
3. Kies je favoriete methode
4. Volg de installatie-instructies
5. Bewaar je back-upcodes op een veilige plek
";
