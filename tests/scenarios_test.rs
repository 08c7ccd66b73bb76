use mockif_suite::GoPackageFixture;

const WRITER: &str = "package ex\n\ntype Writer interface {\n\tWrite(p []byte) error\n}\n";
const SCANNER: &str =
    "package ex\n\nimport \"fmt\"\n\ntype Scanner interface {\n\tScan(s fmt.Scanner) (int, error)\n}\n";

fn fixture(files: &[(&str, &str)]) -> GoPackageFixture {
    files
        .iter()
        .fold(GoPackageFixture::new().unwrap(), |fixture, (name, contents)| {
            fixture.with_file(name, contents).unwrap()
        })
}

#[test]
fn test_single_method_interface() {
    let output = fixture(&[("writer.go", WRITER)]).generate().unwrap();

    assert!(output.contains("type mockWriter struct {\n\tmWrite func(p []byte) error\n}\n"));
    assert!(output.contains(
        "func (wm mockWriter) Write(p []byte) error {\n\treturn wm.mWrite(p)\n}\n"
    ));
}

#[test]
fn test_qualified_argument_keeps_its_import() {
    let output = fixture(&[("scanner.go", SCANNER)])
        .generate_pruned("mocks.go")
        .unwrap();

    assert!(output.contains("import (\n\t\"fmt\"\n)\n"));
    assert!(output.contains("\tmScan func(s fmt.Scanner) (int, error)\n"));
    assert!(output.contains("\treturn sm.mScan(s)\n"));
}

#[test]
fn test_method_without_results() {
    let output = fixture(&[("sink.go", "package ex\n\ntype Sink interface {\n\tPut(b byte)\n}\n")])
        .generate()
        .unwrap();

    assert!(output.contains("func (sm mockSink) Put(b byte) {\n\tsm.mPut(b)\n}\n"));
}

#[test]
fn test_empty_interface() {
    let output = fixture(&[("any.go", "package ex\n\ntype Any interface {}\n")])
        .generate()
        .unwrap();

    assert!(output.contains("type mockAny struct{}\n"));
    assert!(!output.contains("func "));
}

#[test]
fn test_test_files_are_ignored() {
    let output = fixture(&[
        ("a.go", WRITER),
        ("b.go", SCANNER),
        (
            "a_test.go",
            "package ex\n\nimport \"os\"\n\ntype X interface {\n\tOpen(f *os.File) error\n}\n",
        ),
    ])
    .generate()
    .unwrap();

    assert!(output.contains("type mockWriter struct"));
    assert!(output.contains("type mockScanner struct"));
    assert!(!output.contains("mockX"));
    assert!(!output.contains("\"os\""));
}

#[test]
fn test_unsupported_type_is_marked() {
    let output = fixture(&[("odd.go", "package ex\n\ntype Odd interface {\n\tF(c chan int)\n}\n")])
        .generate()
        .unwrap();

    assert!(output.contains("\tmF func(c <unrecognised>)\n"));
}

#[test]
fn test_full_mocks_file() {
    let output = fixture(&[(
        "foo.go",
        "package example\n\nimport (\n\t\"fmt\"\n\t\"strings\"\n)\n\n\
         type Foo interface {\n\tBar(a string, b []int) error\n\tBaz(a fmt.Scanner, b byte) []byte\n}\n\n\
         func trim(s string) string {\n\treturn strings.TrimSpace(s)\n}\n",
    )])
    .generate_pruned("mocks.go")
    .unwrap();

    assert_eq!(
        output,
        "package example\n\
         \n\
         import (\n\
         \t\"fmt\"\n\
         )\n\
         \n\
         type mockFoo struct {\n\
         \tmBar func(a string, b []int) error\n\
         \tmBaz func(a fmt.Scanner, b byte) []byte\n\
         }\n\
         \n\
         func (fm mockFoo) Bar(a string, b []int) error {\n\
         \treturn fm.mBar(a, b)\n\
         }\n\
         func (fm mockFoo) Baz(a fmt.Scanner, b byte) []byte {\n\
         \treturn fm.mBaz(a, b)\n\
         }\n"
    );
}
