//! Contents of the generated files.
//!
//! Text templates are kept indented like the surrounding code; the file
//! writer strips that indentation before the files hit the disk.

use serde_json::{json, Value};

use crate::{deindent::Template, error::Result, format::PrettierOptions};

pub const INDEX_HTML: [&str; 2] = [
    r#"
    <!doctype html>
    <html>
      <head>
        <title>"#,
    r#"</title>
        <meta charset="utf-8" />
      </head>
      <body>
        <div id="app"></div>
      </body>
    </html>
    "#,
];

/// HTML entry point titled after the project.
pub fn index_html(title: &str) -> Result<String> {
    Template::new(&INDEX_HTML).value_with(title, escape_html).assemble()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub const WEBPACK_LESS: &str = r#"
    const path = require('path');
    const HtmlWebpackPlugin = require('html-webpack-plugin');

    module.exports = {
      entry: './src',
      output: {
        path: path.resolve(__dirname, 'dist'),
        filename: 'app.js'
      },
      resolve: {
        extensions: ['.js', '.ts', '.tsx']
      },
      module: {
        rules: [
          {
            test: /\.tsx?$/,
            loader: 'ts-loader'
          },
          {
            test: /\.less$/,
            use: ['style-loader', 'css-loader', 'less-loader']
          },
          {
            test: /\.(svg|gif|png|jpg)$/,
            loader: 'url-loader'
          }
        ]
      },
      plugins: [
        new HtmlWebpackPlugin({
          minify: false,
          template: 'src/index.html'
        })
      ]
    };
"#;

pub const WEBPACK_BABEL: &str = r#"
    const path = require('path');
    const HtmlWebpackPlugin = require('html-webpack-plugin');

    module.exports = {
      entry: './src',
      output: {
        path: path.resolve(__dirname, 'dist'),
        filename: 'app.js'
      },
      resolve: {
        extensions: ['.ts', '.tsx', '.js', '.jsx']
      },
      module: {
        rules: [
          {
            test: /\.tsx?$/,
            use: ['babel-loader', 'ts-loader']
          },
          {
            test: /\.(svg|gif|png|jpg)$/,
            loader: 'url-loader'
          }
        ]
      },
      plugins: [
        new HtmlWebpackPlugin({
          minify: false,
          template: 'src/index.html'
        })
      ]
    };
"#;

pub const WEBPACK_SOURCE_MAPS: &str = r#"
    const path = require('path');
    const HtmlWebpackPlugin = require('html-webpack-plugin');

    module.exports = {
      entry: './src',
      output: {
        path: path.resolve(__dirname, 'dist'),
        filename: 'app.js'
      },
      resolve: {
        extensions: ['.ts', '.tsx', '.js', '.jsx']
      },
      devtool: 'source-maps',
      module: {
        rules: [
          {
            test: /\.tsx?$/,
            use: ['babel-loader', 'ts-loader']
          },
          {
            test: /\.(svg|gif|png|jpg)$/,
            loader: 'url-loader'
          }
        ]
      },
      plugins: [
        new HtmlWebpackPlugin({
          minify: false,
          template: 'src/index.html'
        })
      ]
    };
"#;

pub const INDEX_TSX_PLAIN: &str = r#"
    import * as React from 'react';
    import { render } from 'react-dom';

    render(
      <div>Hello, World!</div>,
      document.getElementById('app')
    );
"#;

pub const INDEX_TSX_STYLED: &str = r#"
    import * as React from 'react';
    import { render } from 'react-dom';
    import styled from 'react-emotion';

    const Message = styled.div`
      font-size: 24px;
      font-weight: bold;
      font-family: sans-serif;
      color: maroon;
      text-align: center;
      text-decoration: underline;
    `;

    render(
      <Message>Hello, World!</Message>,
      document.getElementById('app')
    );
"#;

/// `.editorconfig` matching the formatter style.
pub fn editorconfig(options: &PrettierOptions) -> String {
    let indent_style = if options.use_tabs { "tab" } else { "space" };
    format!(
        r#"
        root = true

        [*]
        indent_style = {indent_style}
        indent_size = {}
        end_of_line = lf
        charset = utf-8
        trim_trailing_whitespace = true
        insert_final_newline = true
        max_line_length = {}

        [*.md]
        trim_trailing_whitespace = false
        "#,
        options.tab_width, options.print_width
    )
}

pub fn tsconfig_es5() -> Value {
    json!({
        "compilerOptions": {
            "module": "commonjs",
            "target": "es5",
            "noImplicitAny": false,
            "sourceMap": false,
            "jsx": "react",
        }
    })
}

pub fn tsconfig_es2017() -> Value {
    json!({
        "compilerOptions": {
            "jsx": "react",
            "module": "es2015",
            "moduleResolution": "node",
            "noErrorTruncation": true,
            "sourceMap": true,
            "rootDir": "./src",
            "target": "es2017",
        }
    })
}

pub fn babelrc() -> Value {
    json!({ "plugins": ["emotion"] })
}

/// The short `.prettierrc` emitted by the emotion preset.
pub fn prettierrc_basic(options: &PrettierOptions) -> Value {
    json!({
        "tabWidth": options.tab_width,
        "semi": options.semi,
        "singleQuote": options.single_quote,
        "printWidth": options.print_width,
    })
}

pub fn vscode_settings(options: &PrettierOptions) -> Value {
    json!({
        "editor.formatOnSave": true,
        "editor.tabSize": options.tab_width,
        "editor.insertSpaces": !options.use_tabs,
        "editor.rulers": [options.print_width],
        "editor.defaultFormatter": "esbenp.prettier-vscode",
        "typescript.tsdk": "node_modules/typescript/lib",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deindent::deindent;

    #[test]
    fn index_html_inserts_escaped_title() {
        let html = deindent(&index_html("a<b>&c").unwrap());
        assert!(html.contains("<title>a&lt;b&gt;&amp;c</title>"));
        let html = index_html("o'brien \"app\"").unwrap();
        assert!(html.contains("<title>o&#39;brien &quot;app&quot;</title>"));
        assert!(html.trim_start().starts_with("<!doctype html>\n<html>\n  <head>"));
    }

    #[test]
    fn templates_deindent_to_column_zero() {
        for template in [WEBPACK_LESS, WEBPACK_BABEL, WEBPACK_SOURCE_MAPS, INDEX_TSX_PLAIN] {
            let out = deindent(template);
            let first = out.trim().lines().next().unwrap();
            assert!(!first.starts_with(' '), "{first:?}");
        }
        let tsx = deindent(INDEX_TSX_STYLED);
        assert!(tsx.contains("\nconst Message = styled.div`\n  font-size: 24px;"));
    }

    #[test]
    fn editorconfig_follows_options() {
        let out = deindent(&editorconfig(&PrettierOptions::default()));
        assert!(out.contains("\nindent_style = space\nindent_size = 2\n"));
        assert!(out.contains("max_line_length = 80"));
        assert!(out.trim_start().starts_with("root = true"));
    }

    #[test]
    fn basic_prettierrc_keeps_legacy_keys() {
        let value = prettierrc_basic(&PrettierOptions::default());
        assert_eq!(
            value,
            json!({ "tabWidth": 2, "semi": true, "singleQuote": true, "printWidth": 80 })
        );
    }
}
